//! Display and layout configuration constants.
//!
//! All positions are in display pixels, origin top-left, for the 128x64
//! SSD1306 panel.

use embedded_graphics::prelude::Point;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

// =============================================================================
// Border
// =============================================================================

// Inclusive corners of the border region. The bottom edge sits on the last row.
pub const BORDER_LEFT: i32 = 3;
pub const BORDER_TOP: i32 = 3;
pub const BORDER_RIGHT: i32 = 125;
pub const BORDER_BOTTOM: i32 = 63;

// =============================================================================
// Cursor Marker
// =============================================================================

/// Side length of the square joystick marker.
pub const MARKER_SIZE: u32 = 8;

/// Offset added to both mapped axes. Shared by X and Y even though their
/// extents differ, so the reachable area is not centred vertically.
pub const CURSOR_MARGIN: i32 = 8;

/// Horizontal travel of the marker across the full sample range.
pub const CURSOR_EXTENT_X: u32 = 112;

/// Vertical travel of the marker across the full sample range.
pub const CURSOR_EXTENT_Y: u32 = 48;

// =============================================================================
// Reading Labels (top-left anchored)
// =============================================================================

pub const X_LABEL_ORIGIN: Point = Point::new(10, 30);
pub const X_VALUE_ORIGIN: Point = Point::new(30, 30);
pub const Y_LABEL_ORIGIN: Point = Point::new(10, 45);
pub const Y_VALUE_ORIGIN: Point = Point::new(30, 45);
