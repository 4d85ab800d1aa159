use ads1115::Ads1115;
use anyhow::Result;
use esp_idf_svc::hal::prelude::{FromValueType, Peripherals};
use log::*;

mod adc;
mod config;
mod i2c;
mod measurement;

use config::Config;
use i2c::EspTransport;

fn main() -> Result<()> {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take()?;

    let config = Config::read()?;

    let i2c = peripherals.i2c0;
    let sda = peripherals.pins.gpio6;
    let scl = peripherals.pins.gpio7;
    let driver = i2c::init_i2c_driver(i2c, sda.into(), scl.into(), config.baudrate_khz.kHz().into())?;

    let transport = EspTransport::new(driver, config.transport);
    let adc = Ads1115::with_settings(transport, config.address, config.settings);
    info!(
        "Reading {} from ADS1115 at {:#04x}",
        config.settings.input,
        config.address.value()
    );

    adc::run(adc, &config)
}
