use crate::{PlatformDeviceInfo, Result, SpiBoardInfo, SpiDeviceInfo};

/// The SPI subsystem as seen by the loader.
pub trait SpiBus {
    /// Look up the controller for a bus number, returning its device name
    /// (e.g. "spi0"). `None` if no controller exists for that bus.
    fn controller_name(&self, bus_num: u32) -> Option<String>;

    /// Find a registered device by its canonical `"<controller>.<cs>"` address.
    fn find_device(&self, address: &str) -> Option<SpiDeviceInfo>;

    /// Delete the device at an address. Returns whether a device was removed.
    fn delete_device(&mut self, address: &str) -> bool;

    /// Register a new device from a board template.
    fn add_device(&mut self, board: &SpiBoardInfo) -> Result<SpiDeviceInfo>;

    /// Snapshot of all currently registered devices.
    fn devices(&self) -> Vec<SpiDeviceInfo>;
}

/// The platform device subsystem as seen by the loader.
pub trait PlatformBus {
    /// Register a platform device.
    fn register(&mut self, device: &PlatformDeviceInfo) -> Result<()>;

    /// Unregister by driver name and instance id. Returns whether a device
    /// was removed.
    fn unregister(&mut self, driver: &str, id: i32) -> bool;

    /// Snapshot of all currently registered devices.
    fn devices(&self) -> Vec<PlatformDeviceInfo>;
}
