use thiserror::Error;

pub type Result<T, E = TransportError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("controller not found for bus {0}")]
    ControllerNotFound(u32),
    #[error("address already occupied: {0}")]
    AddressInUse(String),
    #[error("device rejected by subsystem: {0}")]
    Rejected(String),
}
