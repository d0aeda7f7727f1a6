//! Audible alert over a PWM-driven piezo buzzer.

use embedded_hal::delay::DelayNs;
use embedded_hal::pwm::SetDutyCycle;

/// PWM wrap value for a 4 kHz tone from the 125 MHz system clock
/// (125 MHz / 31 250 = 4 kHz).
pub const TONE_TOP: u16 = 31_249;

/// Settle time after every pulse before the buzzer may retrigger,
/// protecting the transducer from overlapping tone changes.
pub const COOLDOWN_MS: u32 = 100;

pub struct Buzzer<C> {
    channel: C,
}

impl<C: SetDutyCycle> Buzzer<C> {
    /// Takes the PWM channel, silenced.
    pub fn new(mut channel: C) -> Self {
        channel.set_duty_cycle_fully_off().unwrap();
        Self { channel }
    }

    /// Emits one tone pulse of `duration_ms`, then holds the cooldown.
    /// Blocks for the whole pulse plus cooldown; the control loop does
    /// not poll anything meanwhile.
    pub fn beep(&mut self, duration_ms: u32, delay: &mut impl DelayNs) {
        self.channel.set_duty_cycle_fraction(1, 2).unwrap();
        delay.delay_ms(duration_ms);
        self.channel.set_duty_cycle_fully_off().unwrap();
        delay.delay_ms(COOLDOWN_MS);
    }
}
