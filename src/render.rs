//! Frame composition for the joystick display.
//!
//! Every frame is a full redraw, in this order:
//!
//! 1. Clear to off
//! 2. Border selected by [`BorderStyle`]
//! 3. 8x8 joystick marker at the mapped cursor position
//! 4. Raw readings: `X:` / `Y:` labels with the decimal values beside them
//! 5. Transmit the finished frame
//!
//! | Style | Border |
//! |-------|--------|
//! | [`BorderStyle::Outline`] | hollow rectangle |
//! | [`BorderStyle::Rails`] | top and bottom edges only |
//! | [`BorderStyle::Solid`] | filled rectangle |
//!
//! Everything is drawn "on"; with the solid border the marker and readings are
//! therefore invisible inside the filled area.

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use heapless::String;

use crate::config::{
    BORDER_BOTTOM,
    BORDER_LEFT,
    BORDER_RIGHT,
    BORDER_TOP,
    MARKER_SIZE,
    X_LABEL_ORIGIN,
    X_VALUE_ORIGIN,
    Y_LABEL_ORIGIN,
    Y_VALUE_ORIGIN,
};
use crate::display::{FrameSink, Framebuffer};
use crate::mapping::CursorPosition;
use crate::mode::{BorderStyle, ModeState};
use crate::sampler::AxisSample;
use crate::styles::{OUTLINE, READING_STYLE, SOLID};

/// Longest decimal reading ("4095") plus slack.
const READING_LEN: usize = 6;

/// Owns the frame and redraws it every cycle.
pub struct Compositor {
    frame: Framebuffer,
}

impl Compositor {
    pub const fn new() -> Self {
        Self {
            frame: Framebuffer::new(),
        }
    }

    /// The most recently composed frame.
    #[inline]
    pub const fn frame(&self) -> &Framebuffer { &self.frame }

    /// Redraw the frame from scratch without sending it.
    pub fn compose(
        &mut self,
        mode: &ModeState,
        cursor: CursorPosition,
        sample: AxisSample,
    ) {
        self.frame.clear(BinaryColor::Off).ok();
        draw_border(&mut self.frame, mode.border_style);
        draw_marker(&mut self.frame, cursor);
        draw_readings(&mut self.frame, sample);
    }

    /// Compose the frame and transmit it to `sink`.
    pub fn render<S: FrameSink>(
        &mut self,
        mode: &ModeState,
        cursor: CursorPosition,
        sample: AxisSample,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        self.compose(mode, cursor, sample);
        sink.transmit(&self.frame)
    }
}

impl Default for Compositor {
    fn default() -> Self { Self::new() }
}

/// Border region shared by all styles, corners inclusive.
fn border_rect() -> Rectangle {
    Rectangle::with_corners(Point::new(BORDER_LEFT, BORDER_TOP), Point::new(BORDER_RIGHT, BORDER_BOTTOM))
}

/// Draw the border for `style`.
pub fn draw_border<D>(
    display: &mut D,
    style: BorderStyle,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    match style {
        BorderStyle::Outline => {
            border_rect().into_styled(OUTLINE).draw(display).ok();
        }
        BorderStyle::Rails => {
            Line::new(Point::new(BORDER_LEFT, BORDER_TOP), Point::new(BORDER_RIGHT, BORDER_TOP))
                .into_styled(OUTLINE)
                .draw(display)
                .ok();
            Line::new(Point::new(BORDER_LEFT, BORDER_BOTTOM), Point::new(BORDER_RIGHT, BORDER_BOTTOM))
                .into_styled(OUTLINE)
                .draw(display)
                .ok();
        }
        BorderStyle::Solid => {
            border_rect().into_styled(SOLID).draw(display).ok();
        }
    }
}

/// Draw the filled joystick marker with its top-left corner at `cursor`.
pub fn draw_marker<D>(
    display: &mut D,
    cursor: CursorPosition,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(Point::new(cursor.x, cursor.y), Size::new(MARKER_SIZE, MARKER_SIZE))
        .into_styled(SOLID)
        .draw(display)
        .ok();
}

/// Draw the raw readings as `X:` / `Y:` labels followed by decimal values.
pub fn draw_readings<D>(
    display: &mut D,
    sample: AxisSample,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_reading(display, "X:", X_LABEL_ORIGIN, X_VALUE_ORIGIN, sample.x);
    draw_reading(display, "Y:", Y_LABEL_ORIGIN, Y_VALUE_ORIGIN, sample.y);
}

fn draw_reading<D>(
    display: &mut D,
    label: &str,
    label_origin: Point,
    value_origin: Point,
    value: u16,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let mut text: String<READING_LEN> = String::new();
    write!(text, "{value}").ok();

    Text::with_baseline(label, label_origin, READING_STYLE, Baseline::Top)
        .draw(display)
        .ok();
    Text::with_baseline(&text, value_origin, READING_STYLE, Baseline::Top)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    /// Frame sink that keeps a copy of every transmitted frame.
    #[derive(Default)]
    struct CapturingSink {
        frames: Vec<Vec<u8>>,
    }

    impl FrameSink for CapturingSink {
        type Error = ();

        fn transmit(
            &mut self,
            frame: &Framebuffer,
        ) -> Result<(), Self::Error> {
            self.frames.push(frame.as_bytes().to_vec());
            Ok(())
        }
    }

    struct FailingSink;

    impl FrameSink for FailingSink {
        type Error = &'static str;

        fn transmit(
            &mut self,
            _frame: &Framebuffer,
        ) -> Result<(), Self::Error> {
            Err("bus stuck")
        }
    }

    fn on(
        fb: &Framebuffer,
        x: i32,
        y: i32,
    ) -> bool {
        fb.pixel(x, y).is_on()
    }

    fn mode_with(style: BorderStyle) -> ModeState {
        let mut mode = ModeState::new();
        mode.border_style = style;
        mode
    }

    fn border_only(style: BorderStyle) -> Framebuffer {
        let mut fb = Framebuffer::new();
        draw_border(&mut fb, style);
        fb
    }

    #[test]
    fn test_outline_border_edges() {
        let fb = border_only(BorderStyle::Outline);
        for (x, y) in [(3, 3), (125, 3), (3, 63), (125, 63), (64, 3), (64, 63), (3, 30), (125, 30)] {
            assert!(on(&fb, x, y), "edge pixel ({x}, {y}) should be on");
        }
        assert!(!on(&fb, 64, 30), "interior should be empty");
        assert!(!on(&fb, 2, 3));
        assert!(!on(&fb, 126, 3));
        // Perimeter of a 123x61 rectangle
        assert_eq!(fb.count_on(), 2 * 123 + 2 * 59);
    }

    #[test]
    fn test_rails_border_has_no_sides() {
        let fb = border_only(BorderStyle::Rails);
        assert!(on(&fb, 3, 3) && on(&fb, 125, 3));
        assert!(on(&fb, 3, 63) && on(&fb, 125, 63));
        assert!(!on(&fb, 3, 30));
        assert!(!on(&fb, 125, 30));
        assert_eq!(fb.count_on(), 2 * 123);
    }

    #[test]
    fn test_solid_border_filled() {
        let fb = border_only(BorderStyle::Solid);
        assert!(on(&fb, 64, 30));
        assert!(!on(&fb, 2, 30));
        assert!(!on(&fb, 64, 2));
        assert_eq!(fb.count_on(), 123 * 61);
    }

    #[test]
    fn test_marker_is_8x8_at_cursor() {
        let mut fb = Framebuffer::new();
        draw_marker(&mut fb, CursorPosition { x: 64, y: 32 });
        assert_eq!(fb.count_on(), 64);
        assert!(on(&fb, 64, 32));
        assert!(on(&fb, 71, 39));
        assert!(!on(&fb, 72, 32));
        assert!(!on(&fb, 64, 40));
    }

    #[test]
    fn test_marker_at_far_corner_fits() {
        let mut fb = Framebuffer::new();
        draw_marker(&mut fb, CursorPosition { x: 120, y: 56 });
        assert_eq!(fb.count_on(), 64);
        assert!(on(&fb, 127, 63));
    }

    #[test]
    fn test_marker_past_edge_clipped() {
        let mut fb = Framebuffer::new();
        draw_marker(&mut fb, CursorPosition { x: 124, y: 60 });
        // Only columns 124..=127 and rows 60..=63 remain
        assert_eq!(fb.count_on(), 16);
        assert!(on(&fb, 124, 60));
        assert!(on(&fb, 127, 63));
    }

    #[test]
    fn test_readings_drawn_beside_labels() {
        let mut fb = Framebuffer::new();
        draw_readings(&mut fb, AxisSample::new(4095, 7));

        let lit_in = |x0: i32, x1: i32, y0: i32, y1: i32| {
            (y0..y1).any(|y| (x0..x1).any(|x| on(&fb, x, y)))
        };
        // Labels start at x=10, values at x=30, rows at y=30 and y=45
        assert!(lit_in(10, 30, 30, 42), "X label missing");
        assert!(lit_in(30, 60, 30, 42), "X value missing");
        assert!(lit_in(10, 30, 45, 57), "Y label missing");
        assert!(lit_in(30, 40, 45, 57), "Y value missing");
        // Single digit "7" leaves the following cell empty
        assert!(!lit_in(37, 60, 45, 57));
    }

    #[test]
    fn test_readings_change_with_value() {
        let mut a = Framebuffer::new();
        let mut b = Framebuffer::new();
        draw_readings(&mut a, AxisSample::new(1234, 0));
        draw_readings(&mut b, AxisSample::new(4321, 0));
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_compose_clears_previous_frame() {
        let mut compositor = Compositor::new();
        compositor.compose(&mode_with(BorderStyle::Solid), CursorPosition { x: 8, y: 8 }, AxisSample::new(0, 0));
        compositor.compose(&mode_with(BorderStyle::Rails), CursorPosition { x: 8, y: 8 }, AxisSample::new(0, 0));
        // Solid fill from the previous frame is gone
        assert!(!on(compositor.frame(), 100, 20));
    }

    #[test]
    fn test_compose_draws_all_layers() {
        let mut compositor = Compositor::new();
        let cursor = CursorPosition { x: 100, y: 10 };
        compositor.compose(&ModeState::new(), cursor, AxisSample::new(2048, 2048));
        let fb = compositor.frame();
        assert!(on(fb, 3, 3), "border");
        assert!(on(fb, 103, 13), "marker");
        assert!((30..42).any(|y| (10..60).any(|x| on(fb, x, y))), "readings");
        assert_eq!(fb.size(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    }

    #[test]
    fn test_render_transmits_composed_frame() {
        let mut compositor = Compositor::new();
        let mut sink = CapturingSink::default();
        let mode = ModeState::new();
        compositor
            .render(&mode, CursorPosition { x: 64, y: 32 }, AxisSample::new(2048, 2048), &mut sink)
            .unwrap();
        compositor
            .render(&mode, CursorPosition { x: 8, y: 8 }, AxisSample::new(0, 0), &mut sink)
            .unwrap();
        assert_eq!(sink.frames.len(), 2);
        assert_eq!(sink.frames[1], compositor.frame().as_bytes());
        assert_ne!(sink.frames[0], sink.frames[1]);
    }

    #[test]
    fn test_render_reports_sink_error() {
        let mut compositor = Compositor::new();
        let result = compositor.render(
            &ModeState::new(),
            CursorPosition { x: 8, y: 8 },
            AxisSample::new(0, 0),
            &mut FailingSink,
        );
        assert_eq!(result, Err("bus stuck"));
    }
}
