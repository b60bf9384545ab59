//! display-registry: catalog of supported display devices and the engine
//! that registers one of them against the SPI or platform bus.
//!
//! A load attempt resolves a device name to a catalog descriptor, merges the
//! operator's overrides into its configuration, clears any conflicting device
//! at the target bus address, and registers the result through exactly one of
//! the two transports. The returned handle owns the registered resource and
//! is consumed by teardown.

mod types;
pub use types::{
    ColorOrder, CustomGeometry, DeviceConfig, DeviceDescriptor, GpioBinding, PlatformTemplate,
    SpiTemplate, Transport, MAX_INIT_SEQUENCE, SPI_NAME_LEN,
};

mod error;
pub use error::{LoadError, Result};

mod gpio;
pub use gpio::{parse_gpio_specs, MAX_GPIOS, MAX_GPIO_NAME_LEN};

mod catalog;
pub use catalog::Catalog;

mod overrides;
pub use overrides::{apply_custom_geometry, apply_overrides, Overrides};

mod conflict;
pub use conflict::{clear_spi_address, spi_address};

mod engine;
pub use engine::{LoadOutcome, LoadRequest, RegistrationEngine, RegistrationHandle};

mod report;
pub use report::DiagnosticsReporter;
