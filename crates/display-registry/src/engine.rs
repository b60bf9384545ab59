use crate::catalog::LIST_NAME;
use crate::{
    apply_custom_geometry, apply_overrides, clear_spi_address, Catalog, CustomGeometry,
    DeviceDescriptor, LoadError, Overrides, Result, Transport, MAX_INIT_SEQUENCE,
};
use display_bus::{PlatformBus, PlatformDeviceInfo, SpiBoardInfo, SpiBus};
use tracing::{debug, info};

/// Everything the operator supplied for one load attempt.
#[derive(Clone, Debug, Default)]
pub struct LoadRequest {
    /// Catalog name, or the driver name when `custom` is set. The reserved
    /// value "list" requests enumeration instead of registration.
    pub name: String,
    pub busnum: u32,
    pub cs: u32,
    /// Build the descriptor from the request instead of a catalog lookup.
    pub custom: bool,
    pub overrides: Overrides,
    pub geometry: CustomGeometry,
}

/// Successful result of a load attempt.
#[derive(Debug)]
pub enum LoadOutcome {
    /// A device was registered; the handle owns it until teardown. The
    /// descriptor is the merged working copy, kept for reporting.
    Registered {
        handle: RegistrationHandle,
        descriptor: DeviceDescriptor,
    },
    /// The request was "list": the catalog names, no registration attempted.
    Listed(Vec<String>),
}

/// Owns the one registered transport resource of a load/unload cycle.
/// Consumed by [`RegistrationEngine::teardown`].
#[derive(Debug)]
pub struct RegistrationHandle {
    resource: Resource,
}

#[derive(Debug)]
enum Resource {
    Spi { address: String },
    Platform { driver: String, id: i32 },
}

impl RegistrationHandle {
    /// Address of the owned SPI device, if the SPI path was taken.
    pub fn spi_address(&self) -> Option<&str> {
        match &self.resource {
            Resource::Spi { address } => Some(address),
            Resource::Platform { .. } => None,
        }
    }

    /// Driver name and id of the owned platform device, if any.
    pub fn platform_device(&self) -> Option<(&str, i32)> {
        match &self.resource {
            Resource::Spi { .. } => None,
            Resource::Platform { driver, id } => Some((driver, *id)),
        }
    }
}

/// Drives one load attempt from a request to a registered device (or a
/// reported failure), and the matching teardown.
pub struct RegistrationEngine<'a, S, P> {
    spi: &'a mut S,
    platform: &'a mut P,
}

impl<'a, S: SpiBus, P: PlatformBus> RegistrationEngine<'a, S, P> {
    pub fn new(spi: &'a mut S, platform: &'a mut P) -> Self {
        Self { spi, platform }
    }

    /// Resolve, merge, clear conflicts, and register. All validation happens
    /// before any subsystem side effect, so a failure never leaves a
    /// half-registered device behind.
    pub fn load(&mut self, catalog: &Catalog, request: &LoadRequest) -> Result<LoadOutcome> {
        if request.name.is_empty() {
            return Err(LoadError::InvalidParameter(
                "missing required parameter: name".to_string(),
            ));
        }
        if request.geometry.init.len() > MAX_INIT_SEQUENCE {
            return Err(LoadError::InvalidParameter(format!(
                "init: exceeded max sequence length: {MAX_INIT_SEQUENCE}"
            )));
        }
        if request.name == LIST_NAME {
            debug!("list requested, skipping registration");
            return Ok(LoadOutcome::Listed(
                catalog.names().iter().map(|n| n.to_string()).collect(),
            ));
        }

        debug!(name = %request.name, busnum = request.busnum, cs = request.cs, "resolving");
        let mut descriptor = if request.custom {
            catalog.custom_descriptor(&request.name, request.overrides.speed)
        } else {
            catalog
                .resolve(&request.name)
                .cloned()
                .ok_or_else(|| LoadError::UnknownDevice(request.name.clone()))?
        };

        apply_overrides(&mut descriptor.config, &request.overrides);
        if request.custom {
            apply_custom_geometry(&mut descriptor.config, &request.geometry);
        }

        let handle = match &mut descriptor.transport {
            Transport::Spi(template) => {
                let controller = self
                    .spi
                    .controller_name(request.busnum)
                    .ok_or(LoadError::BusUnavailable(request.busnum))?;
                clear_spi_address(self.spi, &controller, request.cs);
                template.bus = request.busnum;
                template.cs = request.cs;
                if request.overrides.speed != 0 {
                    template.max_speed_hz = request.overrides.speed;
                }
                if let Some(mode) = request.overrides.mode {
                    template.mode = mode;
                }
                let board = SpiBoardInfo {
                    modalias: template.modalias.clone(),
                    bus_num: template.bus,
                    chip_select: template.cs,
                    max_speed_hz: template.max_speed_hz,
                    mode: template.mode,
                };
                let device = self
                    .spi
                    .add_device(&board)
                    .map_err(|e| LoadError::RegistrationFailure(e.to_string()))?;
                info!("registered SPI device {device}");
                RegistrationHandle {
                    resource: Resource::Spi {
                        address: device.address,
                    },
                }
            }
            Transport::Platform(template) => {
                let device = PlatformDeviceInfo {
                    driver: template.driver.clone(),
                    id: template.id,
                };
                self.platform
                    .register(&device)
                    .map_err(|e| LoadError::RegistrationFailure(e.to_string()))?;
                info!("registered platform device {device}");
                RegistrationHandle {
                    resource: Resource::Platform {
                        driver: device.driver,
                        id: device.id,
                    },
                }
            }
        };

        Ok(LoadOutcome::Registered { handle, descriptor })
    }

    /// Release the registered device. Best-effort: a device already gone
    /// from the subsystem is not an error. Consumes the handle, so the
    /// resource can only be released once.
    pub fn teardown(&mut self, handle: RegistrationHandle) {
        match handle.resource {
            Resource::Spi { address } => {
                debug!("deleting SPI device at {address}");
                self.spi.delete_device(&address);
            }
            Resource::Platform { driver, id } => {
                debug!("unregistering platform device {driver} id={id}");
                self.platform.unregister(&driver, id);
            }
        }
    }
}
