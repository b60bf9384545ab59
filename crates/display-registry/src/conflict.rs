use display_bus::SpiBus;
use tracing::info;

/// Canonical address of a chip-select slot on a controller, e.g. "spi0.0".
pub fn spi_address(controller: &str, cs: u32) -> String {
    format!("{controller}.{cs}")
}

/// Make sure a bus:chip-select slot is free before registering into it.
/// A leftover device from a previous load is deleted; an empty slot is a
/// no-op, so calling this repeatedly is idempotent.
pub fn clear_spi_address<B: SpiBus>(bus: &mut B, controller: &str, cs: u32) {
    let address = spi_address(controller, cs);
    if bus.find_device(&address).is_some() {
        info!("deleting existing device at {address}");
        bus.delete_device(&address);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use display_bus::{MockSpiBus, SpiBoardInfo};

    fn occupy(bus: &mut MockSpiBus) {
        bus.add_device(&SpiBoardInfo {
            modalias: "spidev".to_string(),
            bus_num: 0,
            chip_select: 0,
            max_speed_hz: 500_000,
            mode: 0,
        })
        .unwrap();
    }

    #[test]
    fn test_clears_occupied_slot() {
        let mut bus = MockSpiBus::new();
        occupy(&mut bus);
        clear_spi_address(&mut bus, "spi0", 0);
        assert!(bus.find_device("spi0.0").is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut bus = MockSpiBus::new();
        occupy(&mut bus);
        clear_spi_address(&mut bus, "spi0", 0);
        clear_spi_address(&mut bus, "spi0", 0);
        assert!(bus.find_device("spi0.0").is_none());
        assert!(bus.devices().is_empty());
    }

    #[test]
    fn test_other_slots_untouched() {
        let mut bus = MockSpiBus::new();
        occupy(&mut bus);
        clear_spi_address(&mut bus, "spi0", 1);
        assert!(bus.find_device("spi0.0").is_some());
    }
}
