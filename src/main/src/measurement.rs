use ads1115::{FullScaleRange, Multiplexer};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Sample {
    pub channel: Multiplexer,
    pub range: FullScaleRange,
    pub raw: i16,
    pub volts: f32,
}

impl Sample {
    pub fn new(channel: Multiplexer, range: FullScaleRange, raw: i16) -> Self {
        Sample {
            channel,
            range,
            raw,
            volts: range.volts(raw),
        }
    }
}
