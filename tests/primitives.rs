//! embedded-graphics primitives rendered into the off-screen canvas.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use mono_offscreen::{Drawable as _, Error, MonoFrameBuffer, PenColor};

const WIDTH: u16 = 84;
const HEIGHT: u16 = 48;

fn lit(canvas: &MonoFrameBuffer<'_>) -> u32 {
    canvas.bitmap().iter().map(|b| b.count_ones()).sum()
}

#[test]
fn rectangle_outline_matches_fill_rect_edges() {
    let mut storage = [0u8; (WIDTH as usize * HEIGHT as usize) / 8];
    let mut canvas = MonoFrameBuffer::with_buffer(WIDTH, HEIGHT, &mut storage).unwrap();
    canvas.begin_frame().unwrap();

    Rectangle::new(Point::new(10, 4), Size::new(20, 12))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(&mut canvas)
        .unwrap();

    for x in 10..30 {
        assert_eq!(canvas.pixel(x, 4), Ok(PenColor::Foreground));
        assert_eq!(canvas.pixel(x, 15), Ok(PenColor::Foreground));
    }
    for y in 4..16 {
        assert_eq!(canvas.pixel(10, y), Ok(PenColor::Foreground));
        assert_eq!(canvas.pixel(29, y), Ok(PenColor::Foreground));
    }
    assert_eq!(canvas.pixel(20, 10), Ok(PenColor::Background));
    assert_eq!(lit(&canvas), 2 * 20 + 2 * 10);
}

#[test]
fn filled_rectangle_equals_fill_rect() {
    let mut a = [0u8; 504];
    let mut b = [0u8; 504];
    let mut styled = MonoFrameBuffer::with_buffer(WIDTH, HEIGHT, &mut a).unwrap();
    let mut direct = MonoFrameBuffer::with_buffer(WIDTH, HEIGHT, &mut b).unwrap();
    styled.begin_frame().unwrap();
    direct.begin_frame().unwrap();

    Rectangle::new(Point::new(5, 3), Size::new(40, 30))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(&mut styled)
        .unwrap();
    direct.fill_rect(5, 3, 40, 30).unwrap();

    assert_eq!(styled.bitmap(), direct.bitmap());
}

#[test]
fn shapes_crossing_the_edge_are_clipped() {
    let mut storage = [0u8; 504];
    let mut canvas = MonoFrameBuffer::with_buffer(WIDTH, HEIGHT, &mut storage).unwrap();
    canvas.begin_frame().unwrap();

    Circle::new(Point::new(60, 30), 40)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(&mut canvas)
        .unwrap();
    Line::new(Point::new(-10, -10), Point::new(100, 100))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(&mut canvas)
        .unwrap();

    assert_eq!(canvas.pixel(0, 0), Ok(PenColor::Foreground));
    assert_eq!(canvas.pixel(47, 47), Ok(PenColor::Foreground));
    assert_eq!(canvas.pixel(83, 47), Ok(PenColor::Foreground));
    assert_eq!(canvas.pixel(0, 47), Ok(PenColor::Background));
}

#[test]
fn text_renders_between_begin_and_end() {
    let mut storage = [0u8; 504];
    let mut canvas = MonoFrameBuffer::with_buffer(WIDTH, HEIGHT, &mut storage).unwrap();
    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let text = Text::with_baseline("Cosa", Point::new(2, 2), style, Baseline::Top);

    assert_eq!(text.draw(&mut canvas), Err(Error::NotActive));

    canvas.begin_frame().unwrap();
    text.draw(&mut canvas).unwrap();
    canvas.end_frame().unwrap();

    assert!(lit(&canvas) > 0);
    let outside_text = canvas.bands().skip(2).flatten().all(|&b| b == 0);
    assert!(outside_text);
}
