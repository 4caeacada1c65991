//! Fixed sketch palette and overlay prompts.

use crate::paint::Color;

/// Background clear color for rendering collaborators.
pub const CLEAR: Color = Color::new(0.1, 0.2, 0.3, 1.0);

/// Committed circle outline.
pub const CIRCLE: Color = Color::opaque(1.0, 1.0, 0.0);

/// Committed segment.
pub const SEGMENT: Color = Color::opaque(1.0, 0.0, 1.0);

/// Intersection markers.
pub const MARKER: Color = Color::opaque(1.0, 1.0, 1.0);

/// In-drag preview geometry (both gestures).
pub const PREVIEW: Color = Color::opaque(0.5, 0.5, 0.5);

/// X axis of the coordinate cross.
pub const AXIS_X: Color = Color::opaque(1.0, 0.3, 0.0);

/// Y axis of the coordinate cross.
pub const AXIS_Y: Color = Color::opaque(0.0, 1.0, 0.5);

/// Intersection marker diameter in pixels.
pub const MARKER_SIZE: f32 = 10.0;

/// Axis half-length in NDC.
pub const AXIS_HALF_LEN: f32 = 0.85;

/// Initial overlay prompts, slots 1..=3.
pub const PROMPTS: [&str; 3] = [
    "Draw circle (click & drag)",
    "Then draw line segment",
    "Intersections: none",
];
