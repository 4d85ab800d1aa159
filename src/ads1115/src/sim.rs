//! In-memory ADS1115 answering framed bus steps, for tests.

use core::time::Duration;

use crate::config::POWER_ON_CONFIG;
use crate::error::BusError;
use crate::register::Register;
use crate::transport::{Direction, Framed, Signal, Step, TransportConfig, WireBus};

enum Phase {
    Idle,
    Addressing,
    Writing { pointer_set: bool, payload: Vec<u8> },
    Reading { index: usize },
}

pub struct SimulatedAdc {
    pub address: u8,
    /// Conversion, config, low threshold, high threshold
    pub registers: [u16; 4],
    pub pointer: u8,
    /// Config reads that still report a conversion in progress
    pub busy_reads: u32,
    /// Busy reads to report after each conversion is started
    pub conversion_reads: u32,
    /// Result latched into the conversion register when a conversion starts
    pub next_sample: i16,
    /// Stop acknowledging anything, as if the device had gone away
    pub absent: bool,
    /// Hold the bus so every step times out
    pub stalled: bool,
    /// Every step seen, in order
    pub steps: Vec<Step>,
    /// Completed register writes
    pub writes: Vec<(u8, u16)>,
    phase: Phase,
}

impl SimulatedAdc {
    pub fn new(address: u8) -> Self {
        SimulatedAdc {
            address,
            registers: [0x0000, POWER_ON_CONFIG, 0x8000, 0x7FFF],
            pointer: 0,
            busy_reads: 0,
            conversion_reads: 0,
            next_sample: 0,
            absent: false,
            stalled: false,
            steps: vec![],
            writes: vec![],
            phase: Phase::Idle,
        }
    }

    pub fn framed(self) -> Framed<SimulatedAdc> {
        Framed::new(self, TransportConfig::default())
    }

    /// The bytes that crossed the wire, address bytes included.
    pub fn wire_bytes(&self) -> Vec<u8> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                Step::Address { address, direction } => {
                    Some(crate::transport::address_byte(*address, *direction))
                }
                Step::Write(byte) => Some(*byte),
                _ => None,
            })
            .collect()
    }

    fn register_value(&self) -> u16 {
        let value = self.registers[usize::from(self.pointer)];
        if self.pointer == Register::Config.pointer() {
            let ready = if self.busy_reads == 0 { 0x8000 } else { 0 };
            (value & 0x7FFF) | ready
        } else {
            value
        }
    }

    fn commit(&mut self, payload: &[u8]) {
        if payload.len() != 2 {
            return;
        }
        let value = u16::from_be_bytes([payload[0], payload[1]]);
        self.writes.push((self.pointer, value));
        match Register::try_from(self.pointer) {
            Ok(Register::Conversion) | Err(_) => {}
            Ok(Register::Config) => {
                self.registers[1] = value & 0x7FFF;
                if value & 0x8000 != 0 {
                    self.registers[0] = self.next_sample as u16;
                    self.busy_reads = self.conversion_reads;
                }
            }
            Ok(register) => self.registers[usize::from(register.pointer())] = value,
        }
    }
}

impl WireBus for SimulatedAdc {
    fn step(&mut self, step: Step, _timeout: Duration) -> Result<Signal, BusError> {
        self.steps.push(step);
        if self.stalled {
            return Err(BusError::Timeout);
        }
        match step {
            Step::Start | Step::RepeatedStart => {
                self.phase = Phase::Addressing;
                Ok(Signal::Done)
            }
            Step::Address { address, direction } => {
                if self.absent || address != self.address {
                    self.phase = Phase::Idle;
                    return Ok(Signal::Nack);
                }
                self.phase = match direction {
                    Direction::Write => Phase::Writing {
                        pointer_set: false,
                        payload: vec![],
                    },
                    Direction::Read => Phase::Reading { index: 0 },
                };
                Ok(Signal::Ack)
            }
            Step::Write(byte) => match &mut self.phase {
                Phase::Writing {
                    pointer_set,
                    payload,
                } => {
                    if !*pointer_set {
                        if byte > 0x03 {
                            return Ok(Signal::Nack);
                        }
                        self.pointer = byte;
                        *pointer_set = true;
                    } else {
                        payload.push(byte);
                    }
                    Ok(Signal::Ack)
                }
                _ => Ok(Signal::Nack),
            },
            Step::Read { ack } => {
                let index = match &mut self.phase {
                    Phase::Reading { index } => {
                        let current = *index;
                        *index += 1;
                        current
                    }
                    _ => return Err(BusError::Other),
                };
                let bytes = self.register_value().to_be_bytes();
                let byte = bytes.get(index).copied().unwrap_or(0xFF);
                if !ack && self.pointer == Register::Config.pointer() && self.busy_reads > 0 {
                    self.busy_reads -= 1;
                }
                Ok(Signal::Byte(byte))
            }
            Step::Stop => {
                if let Phase::Writing { payload, .. } =
                    core::mem::replace(&mut self.phase, Phase::Idle)
                {
                    self.commit(&payload);
                }
                Ok(Signal::Done)
            }
        }
    }
}
