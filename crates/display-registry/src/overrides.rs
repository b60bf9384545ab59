use crate::{ColorOrder, CustomGeometry, DeviceConfig, GpioBinding};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Operator-supplied configuration values merged on top of a descriptor's
/// defaults. `None` / zero fields leave the default in place, except for
/// `rotate` and `debug` which are always stamped.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Overrides {
    pub rotate: u32,
    /// Bus clock in Hz; non-zero also marks a custom device as SPI.
    pub speed: u32,
    pub mode: Option<u32>,
    pub gpios: Option<Vec<GpioBinding>>,
    pub fps: u32,
    pub gamma: Option<String>,
    pub txbuflen: u32,
    pub color_order: Option<ColorOrder>,
    pub startbyte: u32,
    pub debug: u64,
}

/// Merge overrides into a working configuration. Infallible: inputs are
/// validated before this point, and an out-of-range rotation is corrected
/// rather than rejected. Fields are disjoint, so application order does not
/// matter and reapplying the same overrides is idempotent.
pub fn apply_overrides(config: &mut DeviceConfig, overrides: &Overrides) {
    config.rotate = clamp_rotate(overrides.rotate);
    if let Some(order) = overrides.color_order {
        config.color_order = Some(order);
    }
    if overrides.startbyte != 0 {
        config.startbyte = overrides.startbyte;
    }
    if let Some(gamma) = &overrides.gamma {
        if !gamma.is_empty() {
            config.gamma = Some(gamma.clone());
        }
    }
    if overrides.fps != 0 {
        config.fps = overrides.fps;
    }
    if overrides.txbuflen != 0 {
        config.txbuflen = overrides.txbuflen;
    }
    if let Some(gpios) = &overrides.gpios {
        // Whole-list replacement; pins are never merged individually.
        config.gpios = gpios.clone();
    }
    // Zero is meaningful ("no debugging"), so this is unconditional.
    config.debug = overrides.debug;
}

/// Apply custom-device geometry. Only called on the custom path; named
/// catalog entries keep their driver-defined geometry.
pub fn apply_custom_geometry(config: &mut DeviceConfig, geometry: &CustomGeometry) {
    config.width = geometry.width;
    config.height = geometry.height;
    config.buswidth = geometry.buswidth;
    if !geometry.init.is_empty() {
        config.init_sequence = geometry.init.clone();
    }
}

fn clamp_rotate(rotate: u32) -> u32 {
    if rotate > 3 {
        warn!("rotate value {rotate} out of range (0-3), using 0");
        0
    } else {
        rotate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> DeviceConfig {
        DeviceConfig {
            rotate: 0,
            color_order: Some(ColorOrder::Bgr),
            startbyte: 0,
            gamma: Some("default-curve".to_string()),
            fps: 20,
            txbuflen: 4096,
            debug: 5,
            gpios: vec![GpioBinding {
                name: "reset".to_string(),
                pin: 25,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_overrides_keep_defaults_except_debug() {
        let mut config = base_config();
        apply_overrides(&mut config, &Overrides::default());
        assert_eq!(config.fps, 20);
        assert_eq!(config.txbuflen, 4096);
        assert_eq!(config.gamma.as_deref(), Some("default-curve"));
        assert_eq!(config.color_order, Some(ColorOrder::Bgr));
        assert_eq!(config.gpios.len(), 1);
        // debug is always stamped, even when zero
        assert_eq!(config.debug, 0);
    }

    #[test]
    fn test_nonzero_values_override() {
        let mut config = base_config();
        let overrides = Overrides {
            rotate: 2,
            fps: 60,
            txbuflen: 65536,
            startbyte: 0x80,
            gamma: Some("custom".to_string()),
            color_order: Some(ColorOrder::Rgb),
            debug: 7,
            ..Default::default()
        };
        apply_overrides(&mut config, &overrides);
        assert_eq!(config.rotate, 2);
        assert_eq!(config.fps, 60);
        assert_eq!(config.txbuflen, 65536);
        assert_eq!(config.startbyte, 0x80);
        assert_eq!(config.gamma.as_deref(), Some("custom"));
        assert_eq!(config.color_order, Some(ColorOrder::Rgb));
        assert_eq!(config.debug, 7);
    }

    #[test]
    fn test_rotate_out_of_range_clamps_to_zero() {
        let mut config = base_config();
        apply_overrides(&mut config, &Overrides {
            rotate: 7,
            ..Default::default()
        });
        assert_eq!(config.rotate, 0);
    }

    #[test]
    fn test_gpios_replaced_wholesale() {
        let mut config = base_config();
        let overrides = Overrides {
            gpios: Some(vec![
                GpioBinding {
                    name: "dc".to_string(),
                    pin: 24,
                },
                GpioBinding {
                    name: "led".to_string(),
                    pin: 23,
                },
            ]),
            ..Default::default()
        };
        apply_overrides(&mut config, &overrides);
        assert_eq!(config.gpios.len(), 2);
        assert!(config.gpios.iter().all(|b| b.name != "reset"));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let overrides = Overrides {
            rotate: 9,
            fps: 30,
            gamma: Some("g".to_string()),
            color_order: Some(ColorOrder::Rgb),
            gpios: Some(vec![GpioBinding {
                name: "dc".to_string(),
                pin: 24,
            }]),
            debug: 3,
            ..Default::default()
        };
        let mut once = base_config();
        apply_overrides(&mut once, &overrides);
        let mut twice = once.clone();
        apply_overrides(&mut twice, &overrides);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_geometry_applied() {
        let mut config = DeviceConfig::default();
        apply_custom_geometry(&mut config, &CustomGeometry {
            width: 320,
            height: 240,
            buswidth: 8,
            init: vec![-1, 0x01, -2, 100],
        });
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 240);
        assert_eq!(config.buswidth, 8);
        assert_eq!(config.init_sequence, vec![-1, 0x01, -2, 100]);
    }
}
