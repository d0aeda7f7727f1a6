#![no_std]
#![no_main]

//! BitDogLab environmental monitor: DHT11 temperature/humidity over a
//! bit-banged single-wire line, MQ-2 gas threshold input, 5x5 WS2812
//! alert grid, SSD1306 status pages, PWM buzzer, and a JSON telemetry
//! line over UART0 for the downstream serial logger.

use defmt::*;
use defmt_rtt as _;
use embedded_hal::delay::DelayNs;
use embedded_hal::pwm::SetDutyCycle;
use panic_probe as _;

// Provide an alias for our BSP so we can switch targets quickly.
use rp_pico as bsp;

use bsp::entry;
use bsp::hal;
use bsp::hal::{
    clocks::{init_clocks_and_plls, Clock},
    fugit::RateExtU32,
    gpio::{FunctionI2C, InOutPin, Pin, PullUp},
    pac,
    pio::PIOExt,
    uart::{DataBits, StopBits, UartConfig, UartPeripheral},
    watchdog::Watchdog,
    Timer,
};

use smart_leds::{SmartLedsWrite, RGB8};
use ssd1306::{prelude::*, I2CDisplayInterface, Ssd1306};
use ws2812_pio::Ws2812;

use envmon_core::debounce::Debouncer;
use envmon_core::dht11::{Dht11, MonotonicUs, SensorFrame};
use envmon_core::telemetry;
use envmon_core::{GasState, Page, PixelGrid, Rgb};

mod buzzer;
mod display;
mod neopixel;

use buzzer::Buzzer;

/// Audible alert length while gas stays detected.
const ALERT_BEEP_MS: u32 = 3_000;
/// Post-transition delay preventing rapid double page advances.
const PAGE_SWITCH_DELAY_MS: u32 = 300;
/// Inter-cycle sleep; each iteration is also the sensor retry.
const CYCLE_DELAY_MS: u32 = 5_000;

/// RP2040 timer as both the protocol delay source and the monotonic
/// deadline clock for the single-wire decoder.
#[derive(Clone, Copy)]
struct ProtocolTimer(Timer);

impl DelayNs for ProtocolTimer {
    fn delay_ns(&mut self, ns: u32) {
        self.0.delay_ns(ns);
    }
}

impl MonotonicUs for ProtocolTimer {
    fn now_us(&mut self) -> u64 {
        self.0.get_counter().ticks()
    }
}

#[entry]
fn main() -> ! {
    info!("envmon starting");
    // Grab our singleton objects
    let mut pac = pac::Peripherals::take().unwrap();
    let _core = pac::CorePeripherals::take().unwrap();

    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure the clocks
    //
    // The default is to generate a 125 MHz system clock
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // The single-cycle I/O block controls our GPIO pins
    let sio = hal::Sio::new(pac.SIO);

    // Set the pins up according to their function on this particular board
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let mut delay = timer;

    // Telemetry UART for the downstream serial logger
    let uart_pins = (pins.gpio0.into_function(), pins.gpio1.into_function());
    let mut uart = UartPeripheral::new(pac.UART0, uart_pins, &mut pac.RESETS)
        .enable(
            UartConfig::new(115_200.Hz(), DataBits::Eight, None, StopBits::One),
            clocks.peripheral_clock.freq(),
        )
        .unwrap();

    // Set up the SSD1306 status display on I2C1
    let sda_pin: Pin<_, FunctionI2C, PullUp> = pins.gpio14.reconfigure();
    let scl_pin: Pin<_, FunctionI2C, PullUp> = pins.gpio15.reconfigure();
    let i2c = hal::I2C::i2c1(
        pac.I2C1,
        sda_pin,
        scl_pin,
        400.kHz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );
    let mut oled = Ssd1306::new(
        I2CDisplayInterface::new(i2c),
        DisplaySize128x64,
        DisplayRotation::Rotate0,
    )
    .into_buffered_graphics_mode();
    oled.init().unwrap();

    // Set up the WS2812 alert grid on PIO0
    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let mut strip = Ws2812::new(
        pins.gpio7.into_function(),
        &mut pio,
        sm0,
        clocks.peripheral_clock.freq(),
        timer.count_down(),
    );

    // Set up the buzzer on PWM slice 2, channel B (GPIO21)
    let pwm_slices = hal::pwm::Slices::new(pac.PWM, &mut pac.RESETS);
    let mut pwm = pwm_slices.pwm2;
    pwm.set_div_int(1);
    pwm.set_div_frac(0);
    pwm.set_top(buzzer::TONE_TOP);
    pwm.enable();
    pwm.channel_b.output_to(pins.gpio21);
    let mut buzzer = Buzzer::new(&mut pwm.channel_b);

    // Set up the DHT11 single-wire line
    let mut dht = Dht11::new(InOutPin::new(pins.gpio28), ProtocolTimer(timer));

    // Set up the MQ-2 comparator input
    let mut mq2 = pins.gpio20.into_pull_up_input();

    // Set up the page button
    let mut button = Debouncer::new(pins.gpio5.into_pull_up_input());

    let mut grid = PixelGrid::new();
    let mut page = Page::Combined;
    // Last-known-good frame; stays None until the first valid transfer
    // so no default reading is ever displayed.
    let mut last_frame: Option<SensorFrame> = None;

    info!("envmon ready");

    loop {
        let gas = GasState::from_pin(&mut mq2).unwrap();

        match dht.read_frame() {
            Ok(frame) => {
                let line = telemetry::line(&frame, gas);
                uart.write_full_blocking(line.as_bytes());
                uart.write_full_blocking(b"\n");
                last_frame = Some(frame);
            }
            // Timeout or checksum failure: keep the previous frame and
            // let the next cycle retry. Nothing goes out on the wire.
            Err(_) => warn!("sensor read failed, keeping last frame"),
        }

        actuate_alert(gas, &mut grid, &mut strip, &mut buzzer, &mut delay);

        oled.clear_buffer();
        display::render(&mut oled, page, last_frame.as_ref(), gas);
        oled.flush().unwrap();

        if button.pressed(&mut delay).unwrap() {
            page = page.next();
            info!("page changed: {}", page);
            delay.delay_ms(PAGE_SWITCH_DELAY_MS);
        }

        delay.delay_ms(CYCLE_DELAY_MS);
    }
}

/// Drives the visual and audible alert for this cycle. While gas is
/// detected the beep blocks the loop for its full duration plus the
/// cooldown: alert fidelity is deliberately traded for button
/// responsiveness here.
fn actuate_alert<S, C>(
    gas: GasState,
    grid: &mut PixelGrid,
    strip: &mut S,
    buzzer: &mut Buzzer<C>,
    delay: &mut impl DelayNs,
) where
    S: SmartLedsWrite<Color = RGB8>,
    S::Error: core::fmt::Debug,
    C: SetDutyCycle,
{
    if gas.is_detected() {
        grid.draw_cross(Rgb::RED);
        neopixel::push(strip, grid);
        buzzer.beep(ALERT_BEEP_MS, delay);
    } else {
        grid.clear();
        neopixel::push(strip, grid);
    }
}
