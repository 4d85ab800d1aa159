//! Bit fields of the configuration register.
//!
//! ```text
//!  15 | 14..12 | 11..9 |  8   | 7..5 |    4     |    3     |    2    | 1..0
//!  OS |  MUX   |  PGA  | MODE |  DR  | COMP_MODE| COMP_POL | COMP_LAT| COMP_QUE
//! ```

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The configuration register value after power-on, ignoring the read-only status bit.
pub const POWER_ON_CONFIG: u16 = 0x0583;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    OperationalStatus,
    Multiplexer,
    Gain,
    Mode,
    DataRate,
    ComparatorMode,
    ComparatorPolarity,
    ComparatorLatching,
    ComparatorQueue,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::OperationalStatus,
        Field::Multiplexer,
        Field::Gain,
        Field::Mode,
        Field::DataRate,
        Field::ComparatorMode,
        Field::ComparatorPolarity,
        Field::ComparatorLatching,
        Field::ComparatorQueue,
    ];

    pub fn shift(self) -> u16 {
        match self {
            Field::OperationalStatus => 15,
            Field::Multiplexer => 12,
            Field::Gain => 9,
            Field::Mode => 8,
            Field::DataRate => 5,
            Field::ComparatorMode => 4,
            Field::ComparatorPolarity => 3,
            Field::ComparatorLatching => 2,
            Field::ComparatorQueue => 0,
        }
    }

    pub fn width(self) -> u16 {
        match self {
            Field::Multiplexer | Field::Gain | Field::DataRate => 3,
            Field::ComparatorQueue => 2,
            _ => 1,
        }
    }

    /// Bits of the configuration word owned by this field.
    pub fn mask(self) -> u16 {
        ((1 << self.width()) - 1) << self.shift()
    }
}

/// Replace `field` in `word` with `value`, leaving every other bit untouched.
pub fn encode_config(word: u16, field: Field, value: u16) -> Result<u16> {
    if value >> field.width() != 0 {
        return Err(Error::FieldOverflow { field, value });
    }
    Ok((word & !field.mask()) | (value << field.shift()))
}

pub fn decode_config(word: u16, field: Field) -> u16 {
    (word & field.mask()) >> field.shift()
}

/// A typed value of one configuration field.
pub trait ConfigField: Copy {
    const FIELD: Field;

    /// Unshifted field bits.
    fn to_bits(self) -> u16;

    /// Decode unshifted field bits. Only the low `FIELD.width()` bits are looked at.
    fn from_bits(bits: u16) -> Self;
}

fn parse_name<T: Copy>(
    all: &[T],
    name: fn(T) -> &'static str,
    s: &str,
    unknown: &'static str,
) -> Result<T> {
    all.iter()
        .copied()
        .find(|value| name(*value).eq_ignore_ascii_case(s))
        .ok_or(Error::InvalidArgument(unknown))
}

/// Write side of bit 15. Reads of the same bit are decoded by
/// [`decode_status`](crate::register::decode_status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationalStatus {
    #[serde(rename = "no-effect")]
    NoEffect,
    #[serde(rename = "start")]
    StartConversion,
}

/// Input multiplexer: which pins feed the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Multiplexer {
    #[serde(rename = "ain0-ain1")]
    DifferentialAin0Ain1,
    #[serde(rename = "ain0-ain3")]
    DifferentialAin0Ain3,
    #[serde(rename = "ain1-ain3")]
    DifferentialAin1Ain3,
    #[serde(rename = "ain2-ain3")]
    DifferentialAin2Ain3,
    #[serde(rename = "ain0")]
    SingleEndedAin0,
    #[serde(rename = "ain1")]
    SingleEndedAin1,
    #[serde(rename = "ain2")]
    SingleEndedAin2,
    #[serde(rename = "ain3")]
    SingleEndedAin3,
}

/// Programmable gain, expressed as the full-scale input range.
///
/// This only sets the scaling of the result. Never apply more than VDD + 0.3 V to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FullScaleRange {
    #[serde(rename = "6.144v")]
    Fsr6_144V,
    #[serde(rename = "4.096v")]
    Fsr4_096V,
    #[serde(rename = "2.048v")]
    Fsr2_048V,
    #[serde(rename = "1.024v")]
    Fsr1_024V,
    #[serde(rename = "0.512v")]
    Fsr0_512V,
    #[serde(rename = "0.256v")]
    Fsr0_256V,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "continuous")]
    Continuous,
    #[serde(rename = "single-shot")]
    SingleShot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataRate {
    #[serde(rename = "128sps")]
    Sps128,
    #[serde(rename = "250sps")]
    Sps250,
    #[serde(rename = "490sps")]
    Sps490,
    #[serde(rename = "920sps")]
    Sps920,
    #[serde(rename = "1600sps")]
    Sps1600,
    #[serde(rename = "2400sps")]
    Sps2400,
    #[serde(rename = "3300sps")]
    Sps3300,
    /// Code 0b111, kept distinct so it survives a read-modify-write
    #[serde(rename = "3300sps-duplicate")]
    Sps3300Duplicate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparatorMode {
    #[serde(rename = "traditional")]
    Traditional,
    #[serde(rename = "window")]
    Window,
}

/// Active level of the ALERT/RDY pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparatorPolarity {
    #[serde(rename = "active-low")]
    ActiveLow,
    #[serde(rename = "active-high")]
    ActiveHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparatorLatching {
    #[serde(rename = "non-latching")]
    NonLatching,
    #[serde(rename = "latching")]
    Latching,
}

/// Number of conversions beyond a threshold before ALERT/RDY asserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparatorQueue {
    #[serde(rename = "one")]
    AssertAfterOne,
    #[serde(rename = "two")]
    AssertAfterTwo,
    #[serde(rename = "four")]
    AssertAfterFour,
    /// Comparator off, ALERT/RDY high impedance
    #[serde(rename = "disabled")]
    Disable,
}

impl ConfigField for OperationalStatus {
    const FIELD: Field = Field::OperationalStatus;

    fn to_bits(self) -> u16 {
        match self {
            OperationalStatus::NoEffect => 0b0,
            OperationalStatus::StartConversion => 0b1,
        }
    }

    fn from_bits(bits: u16) -> Self {
        match bits & 0b1 {
            0b0 => OperationalStatus::NoEffect,
            _ => OperationalStatus::StartConversion,
        }
    }
}

impl ConfigField for Multiplexer {
    const FIELD: Field = Field::Multiplexer;

    fn to_bits(self) -> u16 {
        match self {
            Multiplexer::DifferentialAin0Ain1 => 0b000,
            Multiplexer::DifferentialAin0Ain3 => 0b001,
            Multiplexer::DifferentialAin1Ain3 => 0b010,
            Multiplexer::DifferentialAin2Ain3 => 0b011,
            Multiplexer::SingleEndedAin0 => 0b100,
            Multiplexer::SingleEndedAin1 => 0b101,
            Multiplexer::SingleEndedAin2 => 0b110,
            Multiplexer::SingleEndedAin3 => 0b111,
        }
    }

    fn from_bits(bits: u16) -> Self {
        match bits & 0b111 {
            0b000 => Multiplexer::DifferentialAin0Ain1,
            0b001 => Multiplexer::DifferentialAin0Ain3,
            0b010 => Multiplexer::DifferentialAin1Ain3,
            0b011 => Multiplexer::DifferentialAin2Ain3,
            0b100 => Multiplexer::SingleEndedAin0,
            0b101 => Multiplexer::SingleEndedAin1,
            0b110 => Multiplexer::SingleEndedAin2,
            _ => Multiplexer::SingleEndedAin3,
        }
    }
}

impl ConfigField for FullScaleRange {
    const FIELD: Field = Field::Gain;

    fn to_bits(self) -> u16 {
        match self {
            FullScaleRange::Fsr6_144V => 0b000,
            FullScaleRange::Fsr4_096V => 0b001,
            FullScaleRange::Fsr2_048V => 0b010,
            FullScaleRange::Fsr1_024V => 0b011,
            FullScaleRange::Fsr0_512V => 0b100,
            FullScaleRange::Fsr0_256V => 0b101,
        }
    }

    fn from_bits(bits: u16) -> Self {
        match bits & 0b111 {
            0b000 => FullScaleRange::Fsr6_144V,
            0b001 => FullScaleRange::Fsr4_096V,
            0b010 => FullScaleRange::Fsr2_048V,
            0b011 => FullScaleRange::Fsr1_024V,
            0b100 => FullScaleRange::Fsr0_512V,
            // 0b110 and 0b111 select the same range as 0b101
            _ => FullScaleRange::Fsr0_256V,
        }
    }
}

impl ConfigField for Mode {
    const FIELD: Field = Field::Mode;

    fn to_bits(self) -> u16 {
        match self {
            Mode::Continuous => 0b0,
            Mode::SingleShot => 0b1,
        }
    }

    fn from_bits(bits: u16) -> Self {
        match bits & 0b1 {
            0b0 => Mode::Continuous,
            _ => Mode::SingleShot,
        }
    }
}

impl ConfigField for DataRate {
    const FIELD: Field = Field::DataRate;

    fn to_bits(self) -> u16 {
        match self {
            DataRate::Sps128 => 0b000,
            DataRate::Sps250 => 0b001,
            DataRate::Sps490 => 0b010,
            DataRate::Sps920 => 0b011,
            DataRate::Sps1600 => 0b100,
            DataRate::Sps2400 => 0b101,
            DataRate::Sps3300 => 0b110,
            DataRate::Sps3300Duplicate => 0b111,
        }
    }

    fn from_bits(bits: u16) -> Self {
        match bits & 0b111 {
            0b000 => DataRate::Sps128,
            0b001 => DataRate::Sps250,
            0b010 => DataRate::Sps490,
            0b011 => DataRate::Sps920,
            0b100 => DataRate::Sps1600,
            0b101 => DataRate::Sps2400,
            0b110 => DataRate::Sps3300,
            _ => DataRate::Sps3300Duplicate,
        }
    }
}

impl ConfigField for ComparatorMode {
    const FIELD: Field = Field::ComparatorMode;

    fn to_bits(self) -> u16 {
        match self {
            ComparatorMode::Traditional => 0b0,
            ComparatorMode::Window => 0b1,
        }
    }

    fn from_bits(bits: u16) -> Self {
        match bits & 0b1 {
            0b0 => ComparatorMode::Traditional,
            _ => ComparatorMode::Window,
        }
    }
}

impl ConfigField for ComparatorPolarity {
    const FIELD: Field = Field::ComparatorPolarity;

    fn to_bits(self) -> u16 {
        match self {
            ComparatorPolarity::ActiveLow => 0b0,
            ComparatorPolarity::ActiveHigh => 0b1,
        }
    }

    fn from_bits(bits: u16) -> Self {
        match bits & 0b1 {
            0b0 => ComparatorPolarity::ActiveLow,
            _ => ComparatorPolarity::ActiveHigh,
        }
    }
}

impl ConfigField for ComparatorLatching {
    const FIELD: Field = Field::ComparatorLatching;

    fn to_bits(self) -> u16 {
        match self {
            ComparatorLatching::NonLatching => 0b0,
            ComparatorLatching::Latching => 0b1,
        }
    }

    fn from_bits(bits: u16) -> Self {
        match bits & 0b1 {
            0b0 => ComparatorLatching::NonLatching,
            _ => ComparatorLatching::Latching,
        }
    }
}

impl ConfigField for ComparatorQueue {
    const FIELD: Field = Field::ComparatorQueue;

    fn to_bits(self) -> u16 {
        match self {
            ComparatorQueue::AssertAfterOne => 0b00,
            ComparatorQueue::AssertAfterTwo => 0b01,
            ComparatorQueue::AssertAfterFour => 0b10,
            ComparatorQueue::Disable => 0b11,
        }
    }

    fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0b00 => ComparatorQueue::AssertAfterOne,
            0b01 => ComparatorQueue::AssertAfterTwo,
            0b10 => ComparatorQueue::AssertAfterFour,
            _ => ComparatorQueue::Disable,
        }
    }
}

impl OperationalStatus {
    pub const ALL: &'static [OperationalStatus] =
        &[OperationalStatus::NoEffect, OperationalStatus::StartConversion];

    pub fn name(self) -> &'static str {
        match self {
            OperationalStatus::NoEffect => "no-effect",
            OperationalStatus::StartConversion => "start",
        }
    }
}

impl Multiplexer {
    pub const ALL: &'static [Multiplexer] = &[
        Multiplexer::DifferentialAin0Ain1,
        Multiplexer::DifferentialAin0Ain3,
        Multiplexer::DifferentialAin1Ain3,
        Multiplexer::DifferentialAin2Ain3,
        Multiplexer::SingleEndedAin0,
        Multiplexer::SingleEndedAin1,
        Multiplexer::SingleEndedAin2,
        Multiplexer::SingleEndedAin3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Multiplexer::DifferentialAin0Ain1 => "ain0-ain1",
            Multiplexer::DifferentialAin0Ain3 => "ain0-ain3",
            Multiplexer::DifferentialAin1Ain3 => "ain1-ain3",
            Multiplexer::DifferentialAin2Ain3 => "ain2-ain3",
            Multiplexer::SingleEndedAin0 => "ain0",
            Multiplexer::SingleEndedAin1 => "ain1",
            Multiplexer::SingleEndedAin2 => "ain2",
            Multiplexer::SingleEndedAin3 => "ain3",
        }
    }

    pub fn is_single_ended(self) -> bool {
        self.to_bits() & 0b100 != 0
    }
}

impl Mode {
    pub const ALL: &'static [Mode] = &[Mode::Continuous, Mode::SingleShot];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Continuous => "continuous",
            Mode::SingleShot => "single-shot",
        }
    }
}

impl ComparatorMode {
    pub const ALL: &'static [ComparatorMode] =
        &[ComparatorMode::Traditional, ComparatorMode::Window];

    pub fn name(self) -> &'static str {
        match self {
            ComparatorMode::Traditional => "traditional",
            ComparatorMode::Window => "window",
        }
    }
}

impl ComparatorPolarity {
    pub const ALL: &'static [ComparatorPolarity] =
        &[ComparatorPolarity::ActiveLow, ComparatorPolarity::ActiveHigh];

    pub fn name(self) -> &'static str {
        match self {
            ComparatorPolarity::ActiveLow => "active-low",
            ComparatorPolarity::ActiveHigh => "active-high",
        }
    }
}

impl ComparatorLatching {
    pub const ALL: &'static [ComparatorLatching] =
        &[ComparatorLatching::NonLatching, ComparatorLatching::Latching];

    pub fn name(self) -> &'static str {
        match self {
            ComparatorLatching::NonLatching => "non-latching",
            ComparatorLatching::Latching => "latching",
        }
    }
}

impl ComparatorQueue {
    pub const ALL: &'static [ComparatorQueue] = &[
        ComparatorQueue::AssertAfterOne,
        ComparatorQueue::AssertAfterTwo,
        ComparatorQueue::AssertAfterFour,
        ComparatorQueue::Disable,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ComparatorQueue::AssertAfterOne => "one",
            ComparatorQueue::AssertAfterTwo => "two",
            ComparatorQueue::AssertAfterFour => "four",
            ComparatorQueue::Disable => "disabled",
        }
    }
}

impl fmt::Display for OperationalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Multiplexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for FullScaleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for DataRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ComparatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ComparatorPolarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ComparatorLatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ComparatorQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationalStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_name(Self::ALL, Self::name, s, "unknown operational status")
    }
}

impl FromStr for Multiplexer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_name(Self::ALL, Self::name, s, "unknown input channel")
    }
}

impl FromStr for FullScaleRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_name(Self::ALL, Self::name, s, "unknown full-scale range")
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_name(Self::ALL, Self::name, s, "unknown operating mode")
    }
}

impl FromStr for DataRate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_name(Self::ALL, Self::name, s, "unknown data rate")
    }
}

impl FromStr for ComparatorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_name(Self::ALL, Self::name, s, "unknown comparator mode")
    }
}

impl FromStr for ComparatorPolarity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_name(Self::ALL, Self::name, s, "unknown comparator polarity")
    }
}

impl FromStr for ComparatorLatching {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_name(Self::ALL, Self::name, s, "unknown comparator latching")
    }
}

impl FromStr for ComparatorQueue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_name(Self::ALL, Self::name, s, "unknown comparator queue")
    }
}

impl FullScaleRange {
    pub const ALL: &'static [FullScaleRange] = &[
        FullScaleRange::Fsr6_144V,
        FullScaleRange::Fsr4_096V,
        FullScaleRange::Fsr2_048V,
        FullScaleRange::Fsr1_024V,
        FullScaleRange::Fsr0_512V,
        FullScaleRange::Fsr0_256V,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FullScaleRange::Fsr6_144V => "6.144v",
            FullScaleRange::Fsr4_096V => "4.096v",
            FullScaleRange::Fsr2_048V => "2.048v",
            FullScaleRange::Fsr1_024V => "1.024v",
            FullScaleRange::Fsr0_512V => "0.512v",
            FullScaleRange::Fsr0_256V => "0.256v",
        }
    }

    pub fn full_scale_volts(self) -> f32 {
        match self {
            FullScaleRange::Fsr6_144V => 6.144,
            FullScaleRange::Fsr4_096V => 4.096,
            FullScaleRange::Fsr2_048V => 2.048,
            FullScaleRange::Fsr1_024V => 1.024,
            FullScaleRange::Fsr0_512V => 0.512,
            FullScaleRange::Fsr0_256V => 0.256,
        }
    }

    /// Scale a raw conversion result to volts.
    pub fn volts(self, raw: i16) -> f32 {
        f32::from(raw) * self.full_scale_volts() / 32768.0
    }
}

impl DataRate {
    pub const ALL: &'static [DataRate] = &[
        DataRate::Sps128,
        DataRate::Sps250,
        DataRate::Sps490,
        DataRate::Sps920,
        DataRate::Sps1600,
        DataRate::Sps2400,
        DataRate::Sps3300,
        DataRate::Sps3300Duplicate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DataRate::Sps128 => "128sps",
            DataRate::Sps250 => "250sps",
            DataRate::Sps490 => "490sps",
            DataRate::Sps920 => "920sps",
            DataRate::Sps1600 => "1600sps",
            DataRate::Sps2400 => "2400sps",
            DataRate::Sps3300 => "3300sps",
            DataRate::Sps3300Duplicate => "3300sps-duplicate",
        }
    }
}

/// Cached copy of the configuration register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigWord(u16);

impl ConfigWord {
    pub const fn new(bits: u16) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    /// Replace a single field.
    pub fn with<F: ConfigField>(self, value: F) -> Self {
        let field = F::FIELD;
        Self((self.0 & !field.mask()) | (value.to_bits() << field.shift()))
    }

    pub fn get<F: ConfigField>(self) -> F {
        F::from_bits(decode_config(self.0, F::FIELD))
    }

    pub fn to_bytes(self) -> [u8; 2] {
        crate::register::encode_word(self.0)
    }
}

impl Default for ConfigWord {
    fn default() -> Self {
        Self(POWER_ON_CONFIG)
    }
}

impl From<u16> for ConfigWord {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl From<ConfigWord> for u16 {
    fn from(word: ConfigWord) -> u16 {
        word.0
    }
}

impl fmt::Display for ConfigWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorConfig {
    pub mode: ComparatorMode,
    pub polarity: ComparatorPolarity,
    pub latching: ComparatorLatching,
    pub queue: ComparatorQueue,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        ComparatorConfig {
            mode: ComparatorMode::Traditional,
            polarity: ComparatorPolarity::ActiveLow,
            latching: ComparatorLatching::NonLatching,
            queue: ComparatorQueue::Disable,
        }
    }
}

impl ComparatorConfig {
    pub fn apply(self, word: ConfigWord) -> ConfigWord {
        word.with(self.mode)
            .with(self.polarity)
            .with(self.latching)
            .with(self.queue)
    }
}

/// Every configurable field of the device in one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub input: Multiplexer,
    pub gain: FullScaleRange,
    pub mode: Mode,
    pub rate: DataRate,
    pub comparator: ComparatorConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from(ConfigWord::default())
    }
}

impl From<Settings> for ConfigWord {
    fn from(settings: Settings) -> ConfigWord {
        let word = ConfigWord::new(0)
            .with(settings.input)
            .with(settings.gain)
            .with(settings.mode)
            .with(settings.rate);
        settings.comparator.apply(word)
    }
}

impl From<ConfigWord> for Settings {
    fn from(word: ConfigWord) -> Settings {
        Settings {
            input: word.get(),
            gain: word.get(),
            mode: word.get(),
            rate: word.get(),
            comparator: ComparatorConfig {
                mode: word.get(),
                polarity: word.get(),
                latching: word.get(),
                queue: word.get(),
            },
        }
    }
}
