//! Register transactions over a two-wire bus.
//!
//! A register write goes out as
//!
//! ```text
//! S [addr<<1|W] A [register] A [high] A [low] A P
//! ```
//!
//! and a register read as
//!
//! ```text
//! S [addr<<1|W] A [register] A Sr [addr<<1|R] A [high] A [low] N P
//! ```
//!
//! where the final byte of a read is not acknowledged.

use core::time::Duration;

use log::*;

use crate::error::BusError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(500);

/// Longest register payload carried in one transaction.
pub const MAX_PAYLOAD: usize = 2;

/// The two register-level bus primitives the driver needs.
///
/// Implementations block until the transaction finishes or their timeout
/// elapses, and must not interleave transactions on the same bus.
pub trait Transport {
    /// Write `bytes` to `register` of the device at 7-bit `address`.
    fn write(&mut self, address: u8, register: u8, bytes: &[u8]) -> Result<(), BusError>;

    /// Fill `buffer` from `register` of the device at 7-bit `address`.
    fn read(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), BusError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, address: u8, register: u8, bytes: &[u8]) -> Result<(), BusError> {
        (**self).write(address, register, bytes)
    }

    fn read(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), BusError> {
        (**self).read(address, register, buffer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    Write = 0,
    Read = 1,
}

/// First byte after a (repeated) start: the address followed by the R/W flag.
pub fn address_byte(address: u8, direction: Direction) -> u8 {
    (address << 1) | direction as u8
}

/// One element of a framed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Start,
    RepeatedStart,
    Address { address: u8, direction: Direction },
    Write(u8),
    /// Clock in one byte, acknowledging it if `ack` is set
    Read { ack: bool },
    Stop,
}

/// What the bus reported for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Start, repeated start or stop condition completed
    Done,
    Ack,
    Nack,
    Byte(u8),
}

pub fn write_steps(address: u8, register: u8, payload: &[u8]) -> impl Iterator<Item = Step> + '_ {
    [
        Step::Start,
        Step::Address {
            address,
            direction: Direction::Write,
        },
        Step::Write(register),
    ]
    .into_iter()
    .chain(payload.iter().copied().map(Step::Write))
    .chain(core::iter::once(Step::Stop))
}

pub fn read_steps(address: u8, register: u8, len: usize) -> impl Iterator<Item = Step> {
    [
        Step::Start,
        Step::Address {
            address,
            direction: Direction::Write,
        },
        Step::Write(register),
        Step::RepeatedStart,
        Step::Address {
            address,
            direction: Direction::Read,
        },
    ]
    .into_iter()
    .chain((0..len).map(move |index| Step::Read {
        ack: index + 1 < len,
    }))
    .chain(core::iter::once(Step::Stop))
}

/// A bus controller driven one condition or byte at a time.
pub trait WireBus {
    /// Carry out `step`, giving up once `timeout` has elapsed.
    fn step(&mut self, step: Step, timeout: Duration) -> Result<Signal, BusError>;
}

/// [`Transport`] over a [`WireBus`], framing each transaction step by step.
pub struct Framed<B> {
    bus: B,
    config: TransportConfig,
}

impl<B: WireBus> Framed<B> {
    pub fn new(bus: B, config: TransportConfig) -> Self {
        Framed { bus, config }
    }

    pub fn release(self) -> B {
        self.bus
    }

    fn run(
        &mut self,
        steps: impl Iterator<Item = Step>,
        mut buffer: Option<&mut [u8]>,
    ) -> Result<(), BusError> {
        let mut received = 0;
        for step in steps {
            let result = self
                .bus
                .step(step, self.config.timeout)
                .and_then(|signal| check(step, signal));
            match result {
                Ok(Some(byte)) => {
                    if let Some(buffer) = buffer.as_deref_mut() {
                        buffer[received] = byte;
                    }
                    received += 1;
                }
                Ok(None) => {}
                Err(err) => {
                    debug!("Bus transaction failed at {:?}: {}", step, err);
                    if step != Step::Stop {
                        // Release the bus; the first failure is what gets reported
                        let _ = self.bus.step(Step::Stop, self.config.timeout);
                    }
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}

/// Match a signal against what the step expects from the device.
fn check(step: Step, signal: Signal) -> Result<Option<u8>, BusError> {
    match (step, signal) {
        (Step::Start | Step::RepeatedStart | Step::Stop, Signal::Done) => Ok(None),
        (Step::Address { .. }, Signal::Ack) => Ok(None),
        (Step::Address { .. }, Signal::Nack) => Err(BusError::AddressNack),
        (Step::Write(_), Signal::Ack) => Ok(None),
        (Step::Write(_), Signal::Nack) => Err(BusError::DataNack),
        (Step::Read { .. }, Signal::Byte(byte)) => Ok(Some(byte)),
        _ => Err(BusError::Other),
    }
}

impl<B: WireBus> Transport for Framed<B> {
    fn write(&mut self, address: u8, register: u8, bytes: &[u8]) -> Result<(), BusError> {
        if bytes.len() > MAX_PAYLOAD {
            return Err(BusError::PayloadTooLong { len: bytes.len() });
        }
        trace!("Write {:#04x}[{:#04x}] <- {:02x?}", address, register, bytes);
        self.run(write_steps(address, register, bytes), None)
    }

    fn read(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), BusError> {
        if buffer.len() > MAX_PAYLOAD {
            return Err(BusError::PayloadTooLong { len: buffer.len() });
        }
        let len = buffer.len();
        self.run(read_steps(address, register, len), Some(&mut *buffer))?;
        trace!("Read {:#04x}[{:#04x}] -> {:02x?}", address, register, buffer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_byte() {
        assert_eq!(address_byte(0x48, Direction::Write), 0x90);
        assert_eq!(address_byte(0x48, Direction::Read), 0x91);
        assert_eq!(address_byte(0x4B, Direction::Read), 0x97);
    }

    #[test]
    fn test_write_framing() {
        let steps: Vec<Step> = write_steps(0x48, 0x01, &[0xC5, 0x83]).collect();
        assert_eq!(
            steps,
            vec![
                Step::Start,
                Step::Address {
                    address: 0x48,
                    direction: Direction::Write
                },
                Step::Write(0x01),
                Step::Write(0xC5),
                Step::Write(0x83),
                Step::Stop,
            ]
        );
    }

    #[test]
    fn test_read_framing_nacks_last_byte() {
        let steps: Vec<Step> = read_steps(0x48, 0x00, 2).collect();
        assert_eq!(
            steps,
            vec![
                Step::Start,
                Step::Address {
                    address: 0x48,
                    direction: Direction::Write
                },
                Step::Write(0x00),
                Step::RepeatedStart,
                Step::Address {
                    address: 0x48,
                    direction: Direction::Read
                },
                Step::Read { ack: true },
                Step::Read { ack: false },
                Step::Stop,
            ]
        );
    }

    #[test]
    fn test_single_byte_read_is_not_acked() {
        let reads: Vec<Step> = read_steps(0x48, 0x00, 1)
            .filter(|step| matches!(step, Step::Read { .. }))
            .collect();
        assert_eq!(reads, vec![Step::Read { ack: false }]);
    }

    /// Replays canned signals and records every step.
    struct Scripted {
        signals: Vec<Result<Signal, BusError>>,
        steps: Vec<Step>,
    }

    impl WireBus for Scripted {
        fn step(&mut self, step: Step, _timeout: Duration) -> Result<Signal, BusError> {
            self.steps.push(step);
            if self.signals.is_empty() {
                return Ok(Signal::Done);
            }
            self.signals.remove(0)
        }
    }

    #[test]
    fn test_first_failure_stops_the_transaction() {
        let bus = Scripted {
            signals: vec![Ok(Signal::Done), Ok(Signal::Nack)],
            steps: vec![],
        };
        let mut transport = Framed::new(bus, TransportConfig::default());
        assert_eq!(
            transport.write(0x49, 0x02, &[0x00, 0x10]),
            Err(BusError::AddressNack)
        );
        let bus = transport.release();
        // Start, address, then the stop that releases the bus
        assert_eq!(bus.steps.len(), 3);
        assert_eq!(bus.steps[2], Step::Stop);
    }

    #[test]
    fn test_data_nack_is_distinguished() {
        let bus = Scripted {
            signals: vec![Ok(Signal::Done), Ok(Signal::Ack), Ok(Signal::Nack)],
            steps: vec![],
        };
        let mut transport = Framed::new(bus, TransportConfig::default());
        assert_eq!(transport.write(0x48, 0x07, &[]), Err(BusError::DataNack));
    }

    #[test]
    fn test_timeout_is_reported() {
        let bus = Scripted {
            signals: vec![Ok(Signal::Done), Err(BusError::Timeout)],
            steps: vec![],
        };
        let mut transport = Framed::new(bus, TransportConfig::default());
        let mut buffer = [0u8; 2];
        assert_eq!(
            transport.read(0x48, 0x00, &mut buffer),
            Err(BusError::Timeout)
        );
    }

    #[test]
    fn test_oversized_payload_is_rejected() {
        let bus = Scripted {
            signals: vec![],
            steps: vec![],
        };
        let mut transport = Framed::new(bus, TransportConfig::default());
        assert_eq!(
            transport.write(0x48, 0x01, &[1, 2, 3]),
            Err(BusError::PayloadTooLong { len: 3 })
        );
        assert!(transport.release().steps.is_empty());
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(TransportConfig::default().timeout, Duration::from_millis(500));
    }
}
