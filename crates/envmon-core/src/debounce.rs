//! One-shot debouncing for a mechanical button on an active-low,
//! pulled-up input.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

/// Settle time before a press is confirmed by re-sampling.
pub const SETTLE_DELAY_MS: u32 = 50;

/// Falling-edge detector that reports exactly one press per physical
/// actuation. The settle delay is synchronous: the caller blocks for
/// [`SETTLE_DELAY_MS`] whenever a candidate edge is seen.
pub struct Debouncer<P> {
    pin: P,
    last_pressed: bool,
}

impl<P: InputPin> Debouncer<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            last_pressed: false,
        }
    }

    /// Polls the button once. Returns `true` only on a confirmed
    /// released-to-pressed edge; the edge re-arms as soon as the line
    /// reads released again, so contact bounce within the settle
    /// window cannot produce repeats.
    pub fn pressed(&mut self, delay: &mut impl DelayNs) -> Result<bool, P::Error> {
        let pressed_now = self.pin.is_low()?;

        if pressed_now && !self.last_pressed {
            delay.delay_ms(SETTLE_DELAY_MS);
            if self.pin.is_low()? {
                self.last_pressed = true;
                return Ok(true);
            }
        }

        if !pressed_now {
            self.last_pressed = false;
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    #[test]
    fn one_report_per_press() {
        let mut pin = PinMock::new(&[
            // Edge seen, still pressed after the settle delay.
            Transaction::get(State::Low),
            Transaction::get(State::Low),
            // Button held: no repeat.
            Transaction::get(State::Low),
            // Released: edge re-arms.
            Transaction::get(State::High),
            // Next press reports again.
            Transaction::get(State::Low),
            Transaction::get(State::Low),
        ]);
        let mut delay = NoopDelay::new();
        let mut button = Debouncer::new(&mut pin);

        assert!(button.pressed(&mut delay).unwrap());
        assert!(!button.pressed(&mut delay).unwrap());
        assert!(!button.pressed(&mut delay).unwrap());
        assert!(button.pressed(&mut delay).unwrap());

        drop(button);
        pin.done();
    }

    #[test]
    fn bounce_within_settle_window_is_suppressed() {
        let mut pin = PinMock::new(&[
            // Candidate edge that bounces back up before the
            // confirmation sample: no report, still armed.
            Transaction::get(State::Low),
            Transaction::get(State::High),
            // The contact finally settles pressed: exactly one report.
            Transaction::get(State::Low),
            Transaction::get(State::Low),
            Transaction::get(State::Low),
        ]);
        let mut delay = NoopDelay::new();
        let mut button = Debouncer::new(&mut pin);

        assert!(!button.pressed(&mut delay).unwrap());
        assert!(button.pressed(&mut delay).unwrap());
        assert!(!button.pressed(&mut delay).unwrap());

        drop(button);
        pin.done();
    }
}
