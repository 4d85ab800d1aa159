use ads1115::{BusError, Transport, TransportConfig, MAX_PAYLOAD};
use anyhow::Result;
use esp_idf_svc::hal::{
    delay::TickType,
    gpio::AnyIOPin,
    i2c::{I2c, I2cConfig, I2cDriver},
    peripheral::Peripheral,
    units::Hertz,
};
use esp_idf_svc::sys::{esp_err_t, EspError, ESP_ERR_TIMEOUT, ESP_FAIL};
use log::*;

pub fn init_i2c_driver<'d>(
    i2c: impl Peripheral<P = impl I2c> + 'd,
    sda: AnyIOPin,
    scl: AnyIOPin,
    baudrate: Hertz,
) -> Result<I2cDriver<'d>> {
    let config = I2cConfig::new().baudrate(baudrate);
    let driver = I2cDriver::new(i2c, sda, scl, &config)?;
    Ok(driver)
}

/// Register transactions over the ESP-IDF I2C master driver.
///
/// The driver emits the repeated start for register reads and leaves the
/// last byte unacknowledged.
pub struct EspTransport<'d> {
    driver: I2cDriver<'d>,
    timeout: u32,
}

impl<'d> EspTransport<'d> {
    pub fn new(driver: I2cDriver<'d>, config: TransportConfig) -> Self {
        let timeout = TickType::from(config.timeout).ticks();
        EspTransport { driver, timeout }
    }
}

fn bus_error_from_code(code: esp_err_t) -> BusError {
    match code {
        code if code == ESP_ERR_TIMEOUT as esp_err_t => BusError::Timeout,
        // The legacy driver reports a missing ACK as a plain failure
        code if code == ESP_FAIL => BusError::AddressNack,
        // Includes ESP_ERR_INVALID_STATE: driver not installed or not in master mode
        _ => BusError::Other,
    }
}

fn bus_error(err: EspError) -> BusError {
    let error = bus_error_from_code(err.code());
    debug!("I2C transaction failed: {} -> {:?}", err, error);
    error
}

impl Transport for EspTransport<'_> {
    fn write(&mut self, address: u8, register: u8, bytes: &[u8]) -> Result<(), BusError> {
        if bytes.len() > MAX_PAYLOAD {
            return Err(BusError::PayloadTooLong { len: bytes.len() });
        }
        let mut frame = [0u8; 1 + MAX_PAYLOAD];
        frame[0] = register;
        frame[1..=bytes.len()].copy_from_slice(bytes);
        self.driver
            .write(address, &frame[..=bytes.len()], self.timeout)
            .map_err(bus_error)
    }

    fn read(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), BusError> {
        self.driver
            .write_read(address, &[register], buffer, self.timeout)
            .map_err(bus_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esp_idf_svc::sys::ESP_ERR_INVALID_STATE;

    #[test]
    fn test_bus_error_codes() {
        assert_eq!(bus_error_from_code(ESP_ERR_TIMEOUT as esp_err_t), BusError::Timeout);
        assert_eq!(bus_error_from_code(ESP_FAIL), BusError::AddressNack);
        assert_eq!(
            bus_error_from_code(ESP_ERR_INVALID_STATE as esp_err_t),
            BusError::Other
        );
    }
}
