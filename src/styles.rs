//! Pre-computed static drawing styles.
//!
//! Defined as `const` so no style objects are built per frame.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::PrimitiveStyle;
use profont::PROFONT_9_POINT;

// =============================================================================
// Fonts
// =============================================================================

/// Font for the `X:` / `Y:` readings. Six pixels per glyph, so a 4-digit value
/// fits between the value column and the right edge of the border.
pub const READING_FONT: &MonoFont = &PROFONT_9_POINT;

// =============================================================================
// Text Styles
// =============================================================================

pub const READING_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(READING_FONT, BinaryColor::On);

// =============================================================================
// Primitive Styles
// =============================================================================

/// One-pixel outline for the border and rails.
pub const OUTLINE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

/// Solid fill for the filled border and the joystick marker.
pub const SOLID: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(BinaryColor::On);
