#![no_std]
#![no_main]

use embedded_hal::{digital::OutputPin, spi::SpiBus};
use embedded_hal_0_2::timer::CountDown;
use fugit::{ExtU32Ceil, RateExtU32};
use panic_halt as _;

use mono_offscreen::{Drawable, MonoFrameBuffer, PenColor};
use waveshare_rp2040_zero::{hal::{self as hal, gpio::{bank0::*, FunctionSioOutput, FunctionSpi, Pin, PinState, PullDown}, spi::FrameFormat, Clock, Spi, Timer}, XOSC_CRYSTAL_FREQ};
use hal::pac;

const DISPLAY_WIDTH: u16 = 84;
const DISPLAY_HEIGHT: u16 = 48;
const BITMAP_BYTES: usize = DISPLAY_WIDTH as usize * DISPLAY_HEIGHT as usize / 8;

type SpiPins = (Pin<Gpio3, FunctionSpi, PullDown>, Pin<Gpio2, FunctionSpi, PullDown>);
type DisplaySpi = Spi<hal::spi::Enabled, pac::SPI0, SpiPins, 8>;
type ControlPin<I> = Pin<I, FunctionSioOutput, PullDown>;

// PCD8544 instruction set
const FUNCTION_SET_EXTENDED: u8 = 0x21;
const FUNCTION_SET_BASIC: u8 = 0x20;
const SET_VOP: u8 = 0x80;
const TEMPERATURE_COEFFICIENT: u8 = 0x04;
const BIAS_1_48: u8 = 0x14;
const DISPLAY_NORMAL: u8 = 0x0C;
const SET_Y_BANK: u8 = 0x40;
const SET_X_COLUMN: u8 = 0x80;

struct Pcd8544 {
    spi: DisplaySpi,
    dc_pin: ControlPin<Gpio4>,
    ce_pin: ControlPin<Gpio5>,
}

impl Pcd8544 {
    fn command(&mut self, bytes: &[u8]) {
        _ = self.dc_pin.set_low();
        self.write(bytes);
    }

    fn data(&mut self, bytes: &[u8]) {
        _ = self.dc_pin.set_high();
        self.write(bytes);
    }

    fn write(&mut self, bytes: &[u8]) {
        _ = self.ce_pin.set_low();
        _ = self.spi.write(bytes);
        _ = self.spi.flush();
        _ = self.ce_pin.set_high();
    }

    fn init(&mut self, contrast: u8) {
        self.command(&[
            FUNCTION_SET_EXTENDED,
            SET_VOP | (contrast & 0x7F),
            TEMPERATURE_COEFFICIENT,
            BIAS_1_48,
            FUNCTION_SET_BASIC,
            DISPLAY_NORMAL,
        ]);
    }

    // Each canvas band is one PCD8544 bank, bit 0 on top.
    fn show(&mut self, canvas: &MonoFrameBuffer<'_>) {
        for (bank, band) in canvas.bands().enumerate() {
            self.command(&[SET_Y_BANK | bank as u8, SET_X_COLUMN]);
            self.data(band);
        }
    }
}

#[hal::entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);
    let sio = hal::Sio::new(pac.SIO);

    let clocks = hal::clocks::init_clocks_and_plls(
        XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .unwrap();

    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let ck_pin = pins.gpio2.into_function::<FunctionSpi>();
    let tx_pin = pins.gpio3.into_function::<FunctionSpi>();
    let dc_pin = pins.gpio4.into_push_pull_output_in_state(PinState::High);
    let ce_pin = pins.gpio5.into_push_pull_output_in_state(PinState::High);
    let mut rst_pin = pins.gpio6.into_push_pull_output_in_state(PinState::High);

    let spi = Spi::<_, _, _, 8>::new(pac.SPI0, (tx_pin, ck_pin))
        .init(&mut pac.RESETS, clocks.peripheral_clock.freq(), 4_000_000u32.Hz(), FrameFormat::MotorolaSpi(embedded_hal::spi::MODE_0));

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let mut countdown = timer.count_down();

    _ = rst_pin.set_low();
    countdown.start(10.micros_at_least());
    _ = nb::block!(countdown.wait());
    _ = rst_pin.set_high();

    let mut display = Pcd8544 { spi, dc_pin, ce_pin };
    display.init(0x31);

    let bitmap = cortex_m::singleton!(: [u8; BITMAP_BYTES] = [0; BITMAP_BYTES]).unwrap();
    let mut canvas = MonoFrameBuffer::with_buffer(DISPLAY_WIDTH, DISPLAY_HEIGHT, bitmap).unwrap();

    let mut frame: u16 = 0;
    loop {
        canvas.begin_frame().unwrap();

        canvas.set_pen_color(PenColor::Foreground);
        canvas.fill_rect(0, 0, DISPLAY_WIDTH, 8).unwrap();
        canvas.set_pen_color(PenColor::Background);
        canvas.fill_rect(1, 1, DISPLAY_WIDTH - 2, 6).unwrap();

        canvas.set_pen_color(PenColor::Foreground);
        for y in 8..DISPLAY_HEIGHT {
            for x in 0..(y - 8) {
                canvas.draw_pixel(x, y).unwrap();
            }
        }
        let bar = frame % (DISPLAY_WIDTH - 8);
        canvas.fill_rect(bar, 2, 8, 4).unwrap();

        canvas.end_frame().unwrap();
        display.show(&canvas);

        countdown.start(40_000.micros_at_least());
        _ = nb::block!(countdown.wait());
        frame = frame.wrapping_add(1);
    }
}
