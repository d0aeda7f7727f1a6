//! DHT11 single-wire protocol decoder.
//!
//! The sensor shares one bidirectional line for clock and data. The
//! host pulls the line low for 18 ms to request a transfer, releases
//! it, and the sensor answers with an acknowledgment sequence followed
//! by 40 pulse-width-encoded bits: a "0" holds the line high for a
//! shorter period than a "1", so sampling a fixed delay after each
//! rising edge distinguishes them without clock recovery.
//!
//! All waits are bounded by a monotonic-clock deadline rather than an
//! iteration count, so the worst-case blocking time of [`Dht11::read_frame`]
//! is independent of CPU clock speed. Every exit path, success or
//! failure, leaves the line released (input, pulled toward idle).

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

/// Line held high before the start pulse so the sensor settles.
pub const STABILIZE_MS: u32 = 250;
/// Start pulse: host drives the line low for at least 18 ms.
pub const START_LOW_MS: u32 = 18;
/// Host release before handing the line to the sensor.
pub const RELEASE_US: u32 = 40;
/// Sampling point after a rising edge; longer than a "0" high phase
/// (~26 us) but shorter than a "1" high phase (~70 us).
pub const SAMPLE_DELAY_US: u32 = 35;
/// Budget for any single line transition. An absent or floating sensor
/// trips this on the first acknowledgment wait.
pub const TRANSITION_TIMEOUT_US: u32 = 2_000;

/// Monotonic microsecond counter used for protocol deadlines.
pub trait MonotonicUs {
    fn now_us(&mut self) -> u64;
}

/// One validated humidity/temperature transfer.
///
/// Only constructed when all 40 bits arrived within the timing budget
/// and the checksum matched; a failed read leaves the caller's
/// previous frame in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorFrame {
    /// Relative humidity, whole percent.
    pub humidity: u8,
    /// Temperature, whole degrees Celsius.
    pub temperature: i8,
}

/// Why a frame read was aborted. Neither variant is fatal to the
/// control loop; each iteration is its own retry.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError<E> {
    /// A required line transition did not happen within
    /// [`TRANSITION_TIMEOUT_US`].
    Timeout,
    /// All 40 bits arrived but the additive checksum did not match.
    Checksum,
    /// The pin itself failed.
    Pin(E),
}

impl<E> From<E> for DecodeError<E> {
    fn from(e: E) -> Self {
        DecodeError::Pin(e)
    }
}

/// DHT11 driver over one bidirectional pin and a timing source.
///
/// `P` is open-drain in spirit: `set_low` drives the line, `set_high`
/// releases it to the pull-up so the sensor can talk (the RP2040
/// `InOutPin` behaves exactly like this).
pub struct Dht11<P, T> {
    pin: P,
    timing: T,
}

impl<P, T> Dht11<P, T>
where
    P: InputPin + OutputPin,
    T: DelayNs + MonotonicUs,
{
    pub fn new(pin: P, timing: T) -> Self {
        Self { pin, timing }
    }

    /// Performs one blocking transfer.
    ///
    /// Worst case this blocks for the start sequence plus 83 transition
    /// timeouts (3 acknowledgment waits, 2 per bit); an unresponsive
    /// sensor cannot hang the caller.
    pub fn read_frame(&mut self) -> Result<SensorFrame, DecodeError<P::Error>> {
        self.start_signal()?;

        let data = self.receive()?;
        if !checksum_ok(&data) {
            return Err(DecodeError::Checksum);
        }

        Ok(SensorFrame {
            humidity: data[0],
            temperature: data[2] as i8,
        })
    }

    /// Start sequence: settle high, 18 ms low, short release. Leaves
    /// the line released so the sensor owns it next.
    fn start_signal(&mut self) -> Result<(), DecodeError<P::Error>> {
        self.pin.set_high()?;
        self.timing.delay_ms(STABILIZE_MS);
        self.pin.set_low()?;
        self.timing.delay_ms(START_LOW_MS);
        self.pin.set_high()?;
        self.timing.delay_us(RELEASE_US);
        Ok(())
    }

    /// Acknowledgment: the sensor answers with low/high (~80 us each)
    /// before the first bit. Waits through the tail of the host
    /// release first.
    fn expect_response(&mut self) -> Result<(), DecodeError<P::Error>> {
        self.wait_for_level(false)?;
        self.wait_for_level(true)?;
        self.wait_for_level(false)?;
        Ok(())
    }

    /// Receives the 5 raw bytes, MSB-first: humidity, humidity
    /// fraction, temperature, temperature fraction, checksum.
    fn receive(&mut self) -> Result<[u8; 5], DecodeError<P::Error>> {
        self.expect_response()?;

        let mut data = [0u8; 5];
        for byte in data.iter_mut() {
            for _ in 0..8 {
                *byte <<= 1;
                self.wait_for_level(true)?;
                self.timing.delay_us(SAMPLE_DELAY_US);
                if self.pin.is_high()? {
                    *byte |= 1;
                }
                self.wait_for_level(false)?;
            }
        }
        Ok(data)
    }

    /// Polls until the line reads `high`, aborting once the deadline
    /// passes.
    fn wait_for_level(&mut self, high: bool) -> Result<(), DecodeError<P::Error>> {
        let deadline = self
            .timing
            .now_us()
            .saturating_add(u64::from(TRANSITION_TIMEOUT_US));
        while self.pin.is_high()? != high {
            if self.timing.now_us() >= deadline {
                return Err(DecodeError::Timeout);
            }
            self.timing.delay_us(1);
        }
        Ok(())
    }
}

/// `checksum == (b0 + b1 + b2 + b3) & 0xFF`
fn checksum_ok(data: &[u8; 5]) -> bool {
    let sum = data[0]
        .wrapping_add(data[1])
        .wrapping_add(data[2])
        .wrapping_add(data[3]);
    data[4] == sum
}
