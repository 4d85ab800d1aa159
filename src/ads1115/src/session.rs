use log::*;

use crate::config::{
    ComparatorConfig, ConfigWord, DataRate, FullScaleRange, Mode, Multiplexer, OperationalStatus,
    Settings,
};
use crate::error::{Error, Result};
use crate::register::{self, Register};
use crate::transport::Transport;

/// 7-bit bus address of the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceAddress(u8);

impl DeviceAddress {
    /// ADDR pin tied to GND
    pub const GND: DeviceAddress = DeviceAddress(0x48);
    /// ADDR pin tied to VDD
    pub const VDD: DeviceAddress = DeviceAddress(0x49);
    /// ADDR pin tied to SDA
    pub const SDA: DeviceAddress = DeviceAddress(0x4A);
    /// ADDR pin tied to SCL
    pub const SCL: DeviceAddress = DeviceAddress(0x4B);

    pub fn new(address: u8) -> Result<Self> {
        if address > 0x7F {
            return Err(Error::InvalidArgument("bus address wider than 7 bits"));
        }
        Ok(DeviceAddress(address))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for DeviceAddress {
    fn default() -> Self {
        DeviceAddress::GND
    }
}

impl TryFrom<u8> for DeviceAddress {
    type Error = Error;

    fn try_from(address: u8) -> Result<Self> {
        DeviceAddress::new(address)
    }
}

/// One converter on the bus.
///
/// Keeps a copy of the configuration register so single fields can be
/// changed without reading the device first. Conversions follow
/// `request_channel`, then `is_conversion_ready` until it returns `true`,
/// then `read_conversion`; how often to poll is up to the caller.
pub struct Ads1115<T> {
    transport: T,
    address: DeviceAddress,
    config: ConfigWord,
    buffer: [u8; 2],
}

impl<T: Transport> Ads1115<T> {
    /// Driver for a device still in its power-on configuration.
    pub fn new(transport: T, address: DeviceAddress) -> Self {
        Self::with_config(transport, address, ConfigWord::default())
    }

    /// Driver using `config` for the fields a channel request leaves alone.
    ///
    /// Nothing is written until the first operation that changes the configuration.
    pub fn with_config(transport: T, address: DeviceAddress, config: ConfigWord) -> Self {
        Ads1115 {
            transport,
            address,
            config,
            buffer: [0; 2],
        }
    }

    pub fn with_settings(transport: T, address: DeviceAddress, settings: Settings) -> Self {
        Self::with_config(transport, address, ConfigWord::from(settings))
    }

    pub fn address(&self) -> DeviceAddress {
        self.address
    }

    /// Last configuration written, or to be written by the next request.
    pub fn config(&self) -> ConfigWord {
        self.config
    }

    /// Give back the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// Route `input` to the converter and start a conversion.
    ///
    /// Returns as soon as the configuration is written.
    pub fn request_channel(&mut self, input: Multiplexer) -> Result<()> {
        let word = self
            .config
            .with(input)
            .with(OperationalStatus::StartConversion);
        debug!("Requesting conversion on {}", input);
        self.write_config(word)
    }

    /// Whether the last requested conversion has finished.
    pub fn is_conversion_ready(&mut self) -> Result<bool> {
        self.read_register(Register::Config)?;
        Ok(register::decode_status(self.buffer))
    }

    /// Latest conversion result. Does not wait for a conversion to finish.
    pub fn read_conversion(&mut self) -> Result<i16> {
        self.read_register(Register::Conversion)?;
        Ok(register::decode_conversion(self.buffer))
    }

    /// Write a comparator threshold. `which` must be one of the two threshold registers.
    pub fn set_threshold(&mut self, which: Register, value: i16) -> Result<()> {
        if !which.is_threshold() {
            warn!("Refusing to write threshold {} to {:?}", value, which);
            return Err(Error::InvalidRegister(which));
        }
        debug!("Setting {:?} to {}", which, value);
        self.write_register(which, register::encode_threshold(value))
    }

    pub fn set_low_threshold(&mut self, value: i16) -> Result<()> {
        self.set_threshold(Register::LowThreshold, value)
    }

    pub fn set_high_threshold(&mut self, value: i16) -> Result<()> {
        self.set_threshold(Register::HighThreshold, value)
    }

    pub fn read_threshold(&mut self, which: Register) -> Result<i16> {
        if !which.is_threshold() {
            return Err(Error::InvalidRegister(which));
        }
        self.read_register(which)?;
        Ok(register::decode_threshold(self.buffer))
    }

    pub fn set_gain(&mut self, gain: FullScaleRange) -> Result<()> {
        debug!("Setting full-scale range to {}", gain);
        self.change_config(self.config.with(gain))
    }

    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<()> {
        debug!("Setting data rate to {}", rate);
        self.change_config(self.config.with(rate))
    }

    pub fn set_mode(&mut self, mode: Mode) -> Result<()> {
        debug!("Setting operating mode to {}", mode);
        self.change_config(self.config.with(mode))
    }

    pub fn set_comparator(&mut self, comparator: ComparatorConfig) -> Result<()> {
        debug!("Setting comparator to {:?}", comparator);
        self.change_config(comparator.apply(self.config))
    }

    /// Write a whole configuration word. The cached copy only changes if the write succeeds.
    pub fn write_config(&mut self, word: ConfigWord) -> Result<()> {
        self.write_register(Register::Config, word.to_bytes())?;
        self.config = word;
        Ok(())
    }

    /// Write one changed field without starting a conversion.
    fn change_config(&mut self, word: ConfigWord) -> Result<()> {
        self.write_config(word.with(OperationalStatus::NoEffect))
    }

    /// Configuration as the device reports it. Bit 15 holds the read-side status.
    pub fn read_config(&mut self) -> Result<ConfigWord> {
        self.read_register(Register::Config)?;
        Ok(ConfigWord::new(register::decode_word(self.buffer)))
    }

    fn write_register(&mut self, register: Register, bytes: [u8; 2]) -> Result<()> {
        if !register.is_writable() {
            return Err(Error::InvalidRegister(register));
        }
        self.buffer = bytes;
        self.transport
            .write(self.address.value(), register.pointer(), &self.buffer)?;
        Ok(())
    }

    fn read_register(&mut self, register: Register) -> Result<()> {
        self.buffer = [0; 2];
        self.transport
            .read(self.address.value(), register.pointer(), &mut self.buffer)?;
        Ok(())
    }
}
