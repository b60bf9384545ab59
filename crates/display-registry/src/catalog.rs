use crate::{
    ColorOrder, DeviceConfig, DeviceDescriptor, GpioBinding, PlatformTemplate, SpiTemplate,
    Transport, SPI_NAME_LEN,
};

/// The reserved pseudo-name that requests enumeration instead of a device.
pub(crate) const LIST_NAME: &str = "list";

/// Ordered table of supported display devices. Built once at startup and
/// read-only afterwards; custom devices are never stored here.
pub struct Catalog {
    entries: Vec<DeviceDescriptor>,
}

impl Catalog {
    /// Exact, case-sensitive lookup in catalog order.
    pub fn resolve(&self, name: &str) -> Option<&DeviceDescriptor> {
        self.entries.iter().find(|d| d.name == name)
    }

    /// All supported device names, in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn entries(&self) -> &[DeviceDescriptor] {
        &self.entries
    }

    /// Build a descriptor for an operator-defined device. A non-zero speed
    /// override selects the SPI transport with the device name as modalias;
    /// otherwise the device goes on the platform bus under that name. The
    /// two are mutually exclusive by construction.
    pub fn custom_descriptor(&self, name: &str, speed: u32) -> DeviceDescriptor {
        let transport = if speed != 0 {
            Transport::Spi(SpiTemplate {
                modalias: name.chars().take(SPI_NAME_LEN).collect(),
                max_speed_hz: speed,
                mode: 0,
                bus: 0,
                cs: 0,
            })
        } else {
            Transport::Platform(PlatformTemplate {
                driver: name.to_string(),
                id: 0,
            })
        };
        DeviceDescriptor {
            name: name.to_string(),
            transport,
            config: DeviceConfig::default(),
        }
    }

    /// The built-in device table, alphabetical by name.
    pub fn builtin() -> Self {
        let entries = vec![
            spi("adafruit18fb", "adafruit18fb", 4_000_000, 0, DeviceConfig {
                gpios: pins(&[("reset", 25), ("dc", 24), ("led", 23)]),
                ..Default::default()
            }),
            spi(
                "adafruit18greenfb",
                "adafruit18greenfb",
                4_000_000,
                0,
                DeviceConfig {
                    gpios: pins(&[("reset", 25), ("dc", 24), ("led", 23)]),
                    ..Default::default()
                },
            ),
            spi("adafruit22", "fb_hx8340bn", 32_000_000, 0, DeviceConfig {
                buswidth: 9,
                backlight: true,
                color_order: Some(ColorOrder::Bgr),
                gpios: pins(&[("reset", 25), ("led", 23)]),
                ..Default::default()
            }),
            spi("adafruit22fb", "adafruit22fb", 32_000_000, 0, DeviceConfig {
                gpios: pins(&[("reset", 25), ("led", 23)]),
                ..Default::default()
            }),
            spi("flexfb", "flexfb", 32_000_000, 0, DeviceConfig {
                gpios: pins(&[("reset", 25), ("dc", 24)]),
                ..Default::default()
            }),
            platform("flexpfb", "flexpfb", 0, DeviceConfig {
                gpios: parallel_pins(),
                ..Default::default()
            }),
            spi("hy28afb", "hy28afb", 32_000_000, 3, DeviceConfig {
                gpios: pins(&[("reset", 25), ("led", 18)]),
                ..Default::default()
            }),
            spi("ili9341fb", "ili9341fb", 32_000_000, 0, DeviceConfig {
                gpios: pins(&[("reset", 23), ("led", 24)]),
                ..Default::default()
            }),
            platform("itdb28", "fb_ili9325", 0, DeviceConfig {
                buswidth: 8,
                backlight: true,
                color_order: Some(ColorOrder::Bgr),
                ..Default::default()
            }),
            spi("itdb28_spi", "fb_ili9325", 32_000_000, 0, DeviceConfig {
                buswidth: 8,
                backlight: true,
                color_order: Some(ColorOrder::Bgr),
                gpios: pins(&[("reset", 25), ("dc", 24)]),
                ..Default::default()
            }),
            platform("itdb28fb", "itdb28fb", 0, DeviceConfig {
                gpios: parallel_pins(),
                ..Default::default()
            }),
            spi("itdb28spifb", "itdb28spifb", 32_000_000, 0, DeviceConfig {
                gpios: pins(&[("reset", 25), ("dc", 24)]),
                ..Default::default()
            }),
            spi("mi0283qt-9a", "fb_ili9341", 32_000_000, 0, DeviceConfig {
                buswidth: 9,
                backlight: true,
                color_order: Some(ColorOrder::Bgr),
                gpios: pins(&[("reset", 25), ("led", 18)]),
                ..Default::default()
            }),
            spi("nokia3310", "fb_pcd8544", 400_000, 0, DeviceConfig {
                buswidth: 8,
                gpios: pins(&[("reset", 25), ("dc", 24), ("led", 23)]),
                ..Default::default()
            }),
            spi("nokia3310fb", "nokia3310fb", 4_000_000, 0, DeviceConfig {
                gpios: pins(&[("reset", 25), ("dc", 24), ("led", 23)]),
                ..Default::default()
            }),
            spi("r61505ufb", "r61505ufb", 32_000_000, 0, DeviceConfig {
                gpios: pins(&[("reset", 23), ("led", 24), ("dc", 7)]),
                ..Default::default()
            }),
            spi("sainsmart18", "fb_st7735r", 32_000_000, 0, DeviceConfig {
                buswidth: 8,
                gpios: pins(&[("reset", 25), ("dc", 24)]),
                ..Default::default()
            }),
            spi("sainsmart18fb", "sainsmart18fb", 32_000_000, 0, DeviceConfig {
                gpios: pins(&[("reset", 25), ("dc", 24)]),
                ..Default::default()
            }),
            spi(
                "sainsmart32spifb",
                "sainsmart32spifb",
                16_000_000,
                0,
                DeviceConfig {
                    gpios: pins(&[("reset", 25), ("dc", 24)]),
                    ..Default::default()
                },
            ),
            platform("sainsmart32fb", "sainsmart32fb", 0, DeviceConfig::default()),
            spi("spidev", "spidev", 500_000, 0, DeviceConfig::default()),
            spi("ssd1351fb", "ssd1351fb", 20_000_000, 0, DeviceConfig {
                gpios: pins(&[("reset", 24), ("dc", 25)]),
                ..Default::default()
            }),
        ];
        Self { entries }
    }
}

fn spi(name: &str, modalias: &str, max_speed_hz: u32, mode: u32, config: DeviceConfig) -> DeviceDescriptor {
    DeviceDescriptor {
        name: name.to_string(),
        transport: Transport::Spi(SpiTemplate {
            modalias: modalias.to_string(),
            max_speed_hz,
            mode,
            bus: 0,
            cs: 0,
        }),
        config,
    }
}

fn platform(name: &str, driver: &str, id: i32, config: DeviceConfig) -> DeviceDescriptor {
    DeviceDescriptor {
        name: name.to_string(),
        transport: Transport::Platform(PlatformTemplate {
            driver: driver.to_string(),
            id,
        }),
        config,
    }
}

fn pins(list: &[(&str, i32)]) -> Vec<GpioBinding> {
    list.iter()
        .map(|(name, pin)| GpioBinding {
            name: name.to_string(),
            pin: *pin,
        })
        .collect()
}

// Shared by the 8-bit parallel boards.
fn parallel_pins() -> Vec<GpioBinding> {
    pins(&[
        ("reset", 17),
        ("dc", 1),
        ("wr", 0),
        ("cs", 21),
        ("db00", 9),
        ("db01", 11),
        ("db02", 18),
        ("db03", 23),
        ("db04", 24),
        ("db05", 25),
        ("db06", 8),
        ("db07", 7),
        ("led", 4),
    ])
}
