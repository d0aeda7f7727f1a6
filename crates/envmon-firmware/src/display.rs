//! SSD1306 page layouts.
//!
//! The control loop supplies the page, the latest frame, and the gas
//! state; this module owns text placement. Label strings match the
//! previous firmware generation so the device reads the same in the
//! field. Before the first valid frame values render as `--`.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use envmon_core::{GasState, Page, SensorFrame};
use heapless::String;
use ufmt::uwrite;

const DISPLAY_WIDTH: i32 = 128;
const DISPLAY_HEIGHT: i32 = 64;
const CHAR_WIDTH: i32 = 6;
const CHAR_HEIGHT: i32 = 8;

/// Renders one page into the (already cleared) draw target. The caller
/// flushes.
pub fn render<D>(target: &mut D, page: Page, frame: Option<&SensorFrame>, gas: GasState)
where
    D: DrawTarget<Color = BinaryColor>,
    D::Error: core::fmt::Debug,
{
    let mut line: String<16> = String::new();
    match page {
        Page::Combined => {
            match frame {
                Some(f) => uwrite!(&mut line, "Temp: {}C", f.temperature).unwrap(), // Max str size 10
                None => uwrite!(&mut line, "Temp: --").unwrap(),
            }
            draw_centered(target, &line, 10);

            line.clear();
            match frame {
                Some(f) => uwrite!(&mut line, "Umid: {}%", f.humidity).unwrap(), // Max str size 10
                None => uwrite!(&mut line, "Umid: --").unwrap(),
            }
            draw_centered(target, &line, DISPLAY_HEIGHT / 2 - CHAR_HEIGHT);

            line.clear();
            uwrite!(&mut line, "Gas: {}", gas_label(gas, true)).unwrap(); // Max str size 15
            draw_centered(target, &line, DISPLAY_HEIGHT - 2 * CHAR_HEIGHT);
        }
        Page::HumidityOnly => {
            draw_centered(target, "Umidade", DISPLAY_HEIGHT / 2 - CHAR_HEIGHT);
            match frame {
                Some(f) => uwrite!(&mut line, "{}%", f.humidity).unwrap(), // Max str size 4
                None => uwrite!(&mut line, "--").unwrap(),
            }
            draw_centered(target, &line, DISPLAY_HEIGHT / 2 + CHAR_HEIGHT);
        }
        Page::GasOnly => {
            draw_centered(target, "Gas", DISPLAY_HEIGHT / 2 - CHAR_HEIGHT);
            draw_centered(
                target,
                gas_label(gas, false),
                DISPLAY_HEIGHT / 2 + CHAR_HEIGHT,
            );
        }
        Page::TemperatureOnly => {
            draw_centered(target, "Temperatura", DISPLAY_HEIGHT / 2 - CHAR_HEIGHT);
            match frame {
                Some(f) => uwrite!(&mut line, "{}C", f.temperature).unwrap(), // Max str size 5
                None => uwrite!(&mut line, "--").unwrap(),
            }
            draw_centered(target, &line, DISPLAY_HEIGHT / 2 + CHAR_HEIGHT);
        }
    }
}

fn gas_label(gas: GasState, combined_page: bool) -> &'static str {
    match (gas, combined_page) {
        (GasState::Normal, _) => "Normal",
        (GasState::Detected, true) => "DETECTADO!",
        (GasState::Detected, false) => "Detectado!",
    }
}

fn draw_centered<D>(target: &mut D, text: &str, y: i32)
where
    D: DrawTarget<Color = BinaryColor>,
    D::Error: core::fmt::Debug,
{
    let x = (DISPLAY_WIDTH - text.len() as i32 * CHAR_WIDTH) / 2;
    Text::with_baseline(
        text,
        Point::new(x, y),
        MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
        Baseline::Top,
    )
    .draw(target)
    .unwrap();
}
