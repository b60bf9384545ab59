//! display-bus: abstractions over the SPI and platform device subsystems
//!
//! This crate provides the narrow interface the display loader needs from the
//! underlying device subsystems: enumerate registered devices, look up a
//! controller, delete a device by address, and register/unregister a device.
//! The default build enables a `mock` backend so that binaries and tests can
//! run on any host without real bus hardware.

mod types;
pub use types::{PlatformDeviceInfo, SpiBoardInfo, SpiDeviceInfo};

mod error;
pub use error::{Result, TransportError};

mod traits;
pub use traits::{PlatformBus, SpiBus};

#[cfg(feature = "mock")]
mod mock;

#[cfg(feature = "mock")]
pub use mock::{MockPlatformBus, MockSpiBus};
