use crate::GpioBinding;
use display_bus::{PlatformBus, SpiBus};
use tracing::info;

/// Read-only enumeration of what both transports currently hold, gated by
/// the operator's verbosity level. Never feeds back into load decisions.
pub struct DiagnosticsReporter {
    verbose: u32,
}

impl DiagnosticsReporter {
    pub fn new(verbose: u32) -> Self {
        Self { verbose }
    }

    /// Dump both transports before a load attempt (verbose > 2).
    pub fn before_load<S: SpiBus, P: PlatformBus>(&self, spi: &S, platform: &P) {
        if self.verbose > 2 {
            self.spi_devices(spi);
            self.platform_devices(platform);
        }
    }

    /// Dump both transports after a successful load (verbose > 1).
    pub fn after_load<S: SpiBus, P: PlatformBus>(&self, spi: &S, platform: &P) {
        if self.verbose > 1 {
            self.spi_devices(spi);
            self.platform_devices(platform);
        }
    }

    /// Show the pin bindings a registered device ended up with (verbose > 0).
    pub fn gpios(&self, name: &str, bindings: &[GpioBinding]) {
        if self.verbose == 0 {
            return;
        }
        info!("GPIOs used by '{name}':");
        if bindings.is_empty() {
            info!("    (none)");
        }
        for binding in bindings {
            info!("    '{}' = GPIO{}", binding.name, binding.pin);
        }
    }

    pub fn spi_devices<S: SpiBus>(&self, bus: &S) {
        info!("SPI devices registered:");
        for device in bus.devices() {
            info!("    {device}");
        }
    }

    /// Platform listing is filtered to framebuffer drivers, as everything
    /// else on that bus is noise here.
    pub fn platform_devices<P: PlatformBus>(&self, bus: &P) {
        info!("'fb' platform devices registered:");
        for device in bus.devices() {
            if device.driver.contains("fb") {
                info!("    {device}");
            }
        }
    }
}
