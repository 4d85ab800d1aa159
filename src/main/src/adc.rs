use core::time::Duration;

use ads1115::{Ads1115, Multiplexer, Transport};
use anyhow::{bail, Result};
use esp_idf_svc::hal::delay::FreeRtos;
use log::*;

use crate::config::Config;
use crate::measurement::Sample;

fn sleep(interval: Duration) {
    FreeRtos::delay_ms(u32::try_from(interval.as_millis()).unwrap_or(u32::MAX));
}

/// Start a conversion on `input`, wait for it, and return the raw result.
pub fn read_channel<T: Transport>(
    adc: &mut Ads1115<T>,
    input: Multiplexer,
    poll_interval: Duration,
    max_polls: u32,
) -> Result<i16> {
    adc.request_channel(input)?;

    let mut polls = 0;
    while !adc.is_conversion_ready()? {
        polls += 1;
        if polls > max_polls {
            bail!("Conversion on {} not ready after {} polls", input, max_polls);
        }
        // Yield to other tasks between polls
        sleep(poll_interval);
    }

    Ok(adc.read_conversion()?)
}

pub fn run<T: Transport>(mut adc: Ads1115<T>, config: &Config) -> ! {
    let input = config.settings.input;
    let range = config.settings.gain;
    loop {
        match read_channel(&mut adc, input, config.poll_interval, config.max_polls) {
            Ok(raw) => {
                let sample = Sample::new(input, range, raw);
                info!("Conversion value on {}: {} ({:.4} V)", input, raw, sample.volts);
                match serde_json::to_string(&sample) {
                    Ok(json) => info!("{}", json),
                    Err(err) => error!("Failed to serialize sample: {}", err),
                }
            }
            Err(err) => warn!("Failed to read {}: {:#}", input, err),
        }
        sleep(config.sample_interval);
    }
}
