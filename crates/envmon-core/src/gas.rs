//! Flammable-gas threshold input (MQ-2 comparator output).

use embedded_hal::digital::InputPin;

/// Binary gas reading, refreshed every control-loop cycle. The
/// comparator output is active-low: line low means gas above
/// threshold. No debouncing or hysteresis beyond what the comparator
/// hardware provides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GasState {
    Detected,
    Normal,
}

impl GasState {
    /// Samples the comparator pin.
    pub fn from_pin<P: InputPin>(pin: &mut P) -> Result<Self, P::Error> {
        Ok(if pin.is_low()? {
            GasState::Detected
        } else {
            GasState::Normal
        })
    }

    pub fn is_detected(self) -> bool {
        self == GasState::Detected
    }

    /// Raw pin level as sent on the telemetry line: 1 when normal,
    /// 0 when gas is detected.
    pub fn as_flag(self) -> u8 {
        match self {
            GasState::Detected => 0,
            GasState::Normal => 1,
        }
    }
}
