//! Display page state machine.

/// The fixed set of rendered pages. One confirmed button press
/// advances to the cyclic successor; there is no back direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    Combined,
    HumidityOnly,
    GasOnly,
    TemperatureOnly,
}

impl Page {
    /// Iterates forwards through pages, wrapping after the last one.
    pub fn next(self) -> Page {
        match self {
            Page::Combined => Page::HumidityOnly,
            Page::HumidityOnly => Page::GasOnly,
            Page::GasOnly => Page::TemperatureOnly,
            Page::TemperatureOnly => Page::Combined,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::Combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_has_period_four() {
        for start in [
            Page::Combined,
            Page::HumidityOnly,
            Page::GasOnly,
            Page::TemperatureOnly,
        ] {
            let mut page = start;
            for presses in 1..=4 {
                page = page.next();
                if presses < 4 {
                    assert_ne!(page, start);
                }
            }
            assert_eq!(page, start);
        }
    }

    #[test]
    fn order_matches_display_layouts() {
        assert_eq!(Page::Combined.next(), Page::HumidityOnly);
        assert_eq!(Page::HumidityOnly.next(), Page::GasOnly);
        assert_eq!(Page::GasOnly.next(), Page::TemperatureOnly);
        assert_eq!(Page::TemperatureOnly.next(), Page::Combined);
    }
}
