use crate::{
    PlatformBus, PlatformDeviceInfo, Result, SpiBoardInfo, SpiBus, SpiDeviceInfo, TransportError,
};
use tracing::debug;

/// In-process SPI subsystem. Buses 0 and 1 exist by default.
pub struct MockSpiBus {
    controllers: Vec<u32>,
    devices: Vec<SpiDeviceInfo>,
    refuse_new: bool,
}

impl Default for MockSpiBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSpiBus {
    pub fn new() -> Self {
        Self {
            controllers: vec![0, 1],
            devices: Vec::new(),
            refuse_new: false,
        }
    }

    pub fn with_controllers(controllers: &[u32]) -> Self {
        Self {
            controllers: controllers.to_vec(),
            devices: Vec::new(),
            refuse_new: false,
        }
    }

    /// Make every subsequent `add_device` fail, for exercising rejection paths.
    pub fn refuse_new_devices(&mut self, refuse: bool) {
        self.refuse_new = refuse;
    }
}

impl SpiBus for MockSpiBus {
    fn controller_name(&self, bus_num: u32) -> Option<String> {
        self.controllers
            .iter()
            .find(|&&b| b == bus_num)
            .map(|b| format!("spi{b}"))
    }

    fn find_device(&self, address: &str) -> Option<SpiDeviceInfo> {
        self.devices.iter().find(|d| d.address == address).cloned()
    }

    fn delete_device(&mut self, address: &str) -> bool {
        let before = self.devices.len();
        self.devices.retain(|d| d.address != address);
        let removed = self.devices.len() != before;
        if removed {
            debug!("mock spi: deleted {address}");
        }
        removed
    }

    fn add_device(&mut self, board: &SpiBoardInfo) -> Result<SpiDeviceInfo> {
        if self.refuse_new {
            return Err(TransportError::Rejected("refused by mock".to_string()));
        }
        let controller = self
            .controller_name(board.bus_num)
            .ok_or(TransportError::ControllerNotFound(board.bus_num))?;
        let address = format!("{controller}.{}", board.chip_select);
        if self.find_device(&address).is_some() {
            return Err(TransportError::AddressInUse(address));
        }
        let device = SpiDeviceInfo {
            modalias: board.modalias.clone(),
            address,
            max_speed_hz: board.max_speed_hz,
            bits_per_word: 8,
            mode: board.mode,
        };
        debug!("mock spi: added {device}");
        self.devices.push(device.clone());
        Ok(device)
    }

    fn devices(&self) -> Vec<SpiDeviceInfo> {
        self.devices.clone()
    }
}

/// In-process platform device subsystem.
#[derive(Default)]
pub struct MockPlatformBus {
    devices: Vec<PlatformDeviceInfo>,
    refuse_new: bool,
}

impl MockPlatformBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refuse_new_devices(&mut self, refuse: bool) {
        self.refuse_new = refuse;
    }
}

impl PlatformBus for MockPlatformBus {
    fn register(&mut self, device: &PlatformDeviceInfo) -> Result<()> {
        if self.refuse_new {
            return Err(TransportError::Rejected("refused by mock".to_string()));
        }
        self.devices.push(device.clone());
        Ok(())
    }

    fn unregister(&mut self, driver: &str, id: i32) -> bool {
        let before = self.devices.len();
        self.devices.retain(|d| !(d.driver == driver && d.id == id));
        self.devices.len() != before
    }

    fn devices(&self) -> Vec<PlatformDeviceInfo> {
        self.devices.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(modalias: &str, bus: u32, cs: u32) -> SpiBoardInfo {
        SpiBoardInfo {
            modalias: modalias.to_string(),
            bus_num: bus,
            chip_select: cs,
            max_speed_hz: 500_000,
            mode: 0,
        }
    }

    #[test]
    fn test_add_find_delete() {
        let mut bus = MockSpiBus::new();
        let dev = bus.add_device(&board("spidev", 0, 0)).unwrap();
        assert_eq!(dev.address, "spi0.0");
        assert!(bus.find_device("spi0.0").is_some());
        assert!(bus.delete_device("spi0.0"));
        assert!(bus.find_device("spi0.0").is_none());
        assert!(!bus.delete_device("spi0.0"));
    }

    #[test]
    fn test_occupied_address_rejected() {
        let mut bus = MockSpiBus::new();
        bus.add_device(&board("spidev", 0, 0)).unwrap();
        let err = bus.add_device(&board("other", 0, 0)).unwrap_err();
        assert!(matches!(err, TransportError::AddressInUse(_)));
    }

    #[test]
    fn test_missing_controller() {
        let mut bus = MockSpiBus::with_controllers(&[0]);
        assert!(bus.controller_name(1).is_none());
        let err = bus.add_device(&board("spidev", 1, 0)).unwrap_err();
        assert!(matches!(err, TransportError::ControllerNotFound(1)));
    }

    #[test]
    fn test_platform_register_unregister() {
        let mut bus = MockPlatformBus::new();
        bus.register(&PlatformDeviceInfo {
            driver: "fb_ili9325".to_string(),
            id: 0,
        })
        .unwrap();
        assert_eq!(bus.devices().len(), 1);
        assert!(bus.unregister("fb_ili9325", 0));
        assert!(!bus.unregister("fb_ili9325", 0));
    }
}
