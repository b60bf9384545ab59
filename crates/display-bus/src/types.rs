use core::fmt;
use serde::{Deserialize, Serialize};

/// Template handed to the SPI subsystem when registering a new device.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SpiBoardInfo {
    pub modalias: String,
    pub bus_num: u32,
    pub chip_select: u32,
    pub max_speed_hz: u32,
    pub mode: u32,
}

/// A device currently registered on the SPI bus.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SpiDeviceInfo {
    pub modalias: String,
    /// Canonical address, `"<controller>.<chip-select>"` (e.g. "spi0.0").
    pub address: String,
    pub max_speed_hz: u32,
    pub bits_per_word: u8,
    pub mode: u32,
}

impl fmt::Display for SpiDeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}kHz {} bits mode=0x{:02X}",
            self.modalias,
            self.address,
            self.max_speed_hz / 1000,
            self.bits_per_word,
            self.mode
        )
    }
}

/// A device registered on the platform bus.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlatformDeviceInfo {
    pub driver: String,
    pub id: i32,
}

impl fmt::Display for PlatformDeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} id={}", self.driver, self.id)
    }
}
