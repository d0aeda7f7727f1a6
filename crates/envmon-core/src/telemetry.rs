//! Diagnostic serial line, one per successful sensor read.
//!
//! The format is consumed by an existing downstream log reader and
//! must stay byte-for-byte stable:
//! `{"temperatura": <int>, "umidade": <int>, "gas": <int>}`

use heapless::String;
use ufmt::uwrite;

use crate::dht11::SensorFrame;
use crate::gas::GasState;

/// Longest line is 47 bytes (temperature -128, humidity 255).
pub type TelemetryLine = String<48>;

/// Formats the telemetry line for one successful cycle. Failed cycles
/// emit nothing; the caller simply skips this.
pub fn line(frame: &SensorFrame, gas: GasState) -> TelemetryLine {
    let mut out = TelemetryLine::new();
    uwrite!(
        &mut out,
        "{{\"temperatura\": {}, \"umidade\": {}, \"gas\": {}}}",
        frame.temperature,
        frame.humidity,
        gas.as_flag()
    )
    .unwrap(); // Max str size 47
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_is_byte_for_byte_stable() {
        let frame = SensorFrame {
            humidity: 45,
            temperature: 24,
        };
        assert_eq!(
            line(&frame, GasState::Normal).as_str(),
            "{\"temperatura\": 24, \"umidade\": 45, \"gas\": 1}"
        );
        assert_eq!(
            line(&frame, GasState::Detected).as_str(),
            "{\"temperatura\": 24, \"umidade\": 45, \"gas\": 0}"
        );
    }

    #[test]
    fn extreme_values_fit() {
        let frame = SensorFrame {
            humidity: 255,
            temperature: -128,
        };
        assert_eq!(
            line(&frame, GasState::Detected).as_str(),
            "{\"temperatura\": -128, \"umidade\": 255, \"gas\": 0}"
        );
    }
}
