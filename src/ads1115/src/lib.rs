//! Register-level driver for the TI ADS1115 16-bit delta-sigma ADC.
//!
//! [`Ads1115`] drives one converter through any [`Transport`], which moves
//! register values over the two-wire bus. [`Framed`] builds a transport from
//! a controller that can be driven condition by condition.

#![cfg_attr(not(test), no_std)]

mod config;
mod error;
mod register;
mod session;
mod transport;

#[cfg(test)]
mod sim;

pub use config::{
    decode_config, encode_config, ComparatorConfig, ComparatorLatching, ComparatorMode,
    ComparatorPolarity, ComparatorQueue, ConfigField, ConfigWord, DataRate, Field,
    FullScaleRange, Mode, Multiplexer, OperationalStatus, Settings, POWER_ON_CONFIG,
};
pub use error::{BusError, Error, Result};
pub use register::{
    decode_conversion, decode_status, decode_threshold, decode_word, encode_threshold,
    encode_word, Register,
};
pub use session::{Ads1115, DeviceAddress};
pub use transport::{
    address_byte, read_steps, write_steps, Direction, Framed, Signal, Step, Transport,
    TransportConfig, WireBus, DEFAULT_TIMEOUT, MAX_PAYLOAD,
};
