//! Core geometry and scene types for the clockface analog clock.
//!
//! Everything here is pure: a [`ClockFace`] and a [`ClockTime`] snapshot go
//! in, label positions, hand angles and a [`Scene`] of draw commands come
//! out. Rendering targets only translate scenes into their own primitives.

mod face;
pub mod geometry;
mod hand;
pub mod scene;
mod sweep;
mod theme;
mod time;

pub use face::{ClockFace, FaceError};
pub use geometry::{Point, Polygon, Rect, hand_angle, label_position, rect_hand_outline};
pub use hand::{Hand, HandAngles, HandStyle};
pub use scene::{DrawCommand, Paint, Scene, SceneOptions};
pub use sweep::{DEFAULT_SWEEP_DURATION, HandMotion, Sweep};
pub use theme::ColorTheme;
pub use time::{ClockTime, HourValue};
