use core::time::Duration;

use ads1115::{DataRate, DeviceAddress, FullScaleRange, Mode, Multiplexer, Settings, TransportConfig};
use anyhow::{Context, Error, Result};

#[toml_cfg::toml_config]
pub struct TomlConfig {
    #[default(100)]
    i2c_baudrate_khz: u32,
    #[default(500)]
    i2c_timeout_ms: u64,
    #[default(0x48)]
    device_address: u8,
    #[default("ain1")]
    channel: &'static str,
    #[default("2.048v")]
    gain: &'static str,
    #[default("1600sps")]
    data_rate: &'static str,
    #[default(5)]
    poll_interval_ms: u64,
    #[default(100)]
    max_polls: u32,
    #[default(1000)]
    sample_interval_ms: u64,
}

pub struct Config {
    pub baudrate_khz: u32,
    pub transport: TransportConfig,
    pub address: DeviceAddress,
    pub settings: Settings,
    // Time between readiness checks while a conversion runs
    pub poll_interval: Duration,
    pub max_polls: u32,
    pub sample_interval: Duration,
}

impl Config {
    pub fn read() -> Result<Self> {
        Config::try_from(TOML_CONFIG)
    }
}

impl TryFrom<TomlConfig> for Config {
    type Error = Error;

    fn try_from(config: TomlConfig) -> Result<Self> {
        let input: Multiplexer = config
            .channel
            .parse()
            .with_context(|| format!("Invalid channel {:?}", config.channel))?;
        let gain: FullScaleRange = config
            .gain
            .parse()
            .with_context(|| format!("Invalid gain {:?}", config.gain))?;
        let rate: DataRate = config
            .data_rate
            .parse()
            .with_context(|| format!("Invalid data rate {:?}", config.data_rate))?;
        let address = DeviceAddress::new(config.device_address)
            .with_context(|| format!("Invalid device address {:#x}", config.device_address))?;

        Ok(Config {
            baudrate_khz: config.i2c_baudrate_khz,
            transport: TransportConfig {
                timeout: Duration::from_millis(config.i2c_timeout_ms),
            },
            address,
            settings: Settings {
                input,
                gain,
                rate,
                mode: Mode::SingleShot,
                ..Settings::default()
            },
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            max_polls: config.max_polls,
            sample_interval: Duration::from_millis(config.sample_interval_ms),
        })
    }
}
