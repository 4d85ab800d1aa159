use crate::config::Field;
use crate::register::Register;

/// Failure of a single bus transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BusError {
    /// Nobody acknowledged the address byte
    #[error("device did not acknowledge its address")]
    AddressNack,

    /// The device stopped acknowledging part way through a write
    #[error("device did not acknowledge a data byte")]
    DataNack,

    #[error("bus arbitration lost")]
    ArbitrationLost,

    /// The transaction did not complete within the configured timeout
    #[error("bus transaction timed out")]
    Timeout,

    /// The transport cannot frame a payload of this length
    #[error("payload of {len} bytes does not fit in one transaction")]
    PayloadTooLong { len: usize },

    #[error("bus error")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The register cannot be used for the requested operation
    #[error("register {0:?} is not valid for this operation")]
    InvalidRegister(Register),

    /// A raw value is wider than the configuration field it targets
    #[error("value {value:#x} does not fit in the {field:?} field")]
    FieldOverflow { field: Field, value: u16 },

    #[error(transparent)]
    Bus(#[from] BusError),
}

impl Error {
    /// True for failures raised by the caller's arguments rather than the bus.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Error::Bus(_))
    }
}

pub type Result<T> = core::result::Result<T, Error>;
