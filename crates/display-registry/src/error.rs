use thiserror::Error;

pub type Result<T, E = LoadError> = core::result::Result<T, E>;

/// Failure modes of a single load attempt. List mode is not an error; it is
/// the `Listed` outcome of [`crate::RegistrationEngine::load`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("display not supported: '{0}'")]
    UnknownDevice(String),
    #[error("no SPI controller for bus {0}")]
    BusUnavailable(u32),
    #[error("device registration failed: {0}")]
    RegistrationFailure(String),
}
