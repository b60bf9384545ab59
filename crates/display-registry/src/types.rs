use core::fmt;
use serde::{Deserialize, Serialize};

/// Driver identifier strings are truncated to this length, matching the
/// subsystem's fixed-size name fields.
pub const SPI_NAME_LEN: usize = 32;

/// Maximum number of entries in a custom-device init sequence.
pub const MAX_INIT_SEQUENCE: usize = 50;

/// One symbolic pin role bound to a GPIO number, e.g. `reset:25`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GpioBinding {
    pub name: String,
    pub pin: i32,
}

impl fmt::Display for GpioBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.pin)
    }
}

/// Color component order requested of the driver. Absent means the driver's
/// own default applies.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorOrder {
    Rgb,
    Bgr,
}

/// How the device attaches to the system. Exactly one transport applies to
/// any descriptor.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    Spi(SpiTemplate),
    Platform(PlatformTemplate),
}

/// SPI board template for a bus-attached device. Bus number and chip select
/// are stamped from the load request before registration.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SpiTemplate {
    pub modalias: String,
    pub max_speed_hz: u32,
    pub mode: u32,
    pub bus: u32,
    pub cs: u32,
}

/// Template for a platform-attached device.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlatformTemplate {
    pub driver: String,
    pub id: i32,
}

/// Driver configuration carried by a descriptor. Catalog entries hold the
/// defaults; a load attempt works on a copy with overrides merged in.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Display orientation, 0-3 quarter turns.
    pub rotate: u32,
    pub color_order: Option<ColorOrder>,
    /// Protocol start byte; 0 means unused.
    pub startbyte: u32,
    /// Gamma curve description, driver specific, opaque here.
    pub gamma: Option<String>,
    /// Frames per second; 0 means driver default.
    pub fps: u32,
    /// Transmit buffer length; 0 means driver default.
    pub txbuflen: u32,
    /// Debug bitmask forwarded to the driver.
    pub debug: u64,
    pub gpios: Vec<GpioBinding>,
    pub backlight: bool,
    /// Geometry, only meaningful for custom devices and a few catalog
    /// entries that pin the bus width.
    pub width: u32,
    pub height: u32,
    pub buswidth: u32,
    pub init_sequence: Vec<i32>,
}

/// Custom-device geometry supplied alongside `custom=true`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CustomGeometry {
    pub width: u32,
    pub height: u32,
    pub buswidth: u32,
    pub init: Vec<i32>,
}

/// One catalog entry: a device name, its transport template, and the default
/// configuration its driver expects.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    pub name: String,
    pub transport: Transport,
    pub config: DeviceConfig,
}
