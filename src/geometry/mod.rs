//! Minimal owned geometries that expose their coordinates through [`FlatCoords`].
//!
//! [`FlatCoords`]: crate::flat::FlatCoords

mod line_string;
mod point;
mod polygon;

pub use line_string::LineString;
pub use point::Point;
pub use polygon::Polygon;
