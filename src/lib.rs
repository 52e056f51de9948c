//! Axis-aligned bounding boxes over flat coordinate sequences of any supported layout.
//!
//! Geometry-shaped data exposes its points through [`FlatCoords`]: a [`Layout`], a point-major
//! sequence of ordinates and, for nested shapes, the end offset of each ring. [`Bounds`] consumes
//! that contract to accumulate extents and answer cheap overlap tests.
//!
//! ```
//! use flatgeom::geometry::Point;
//! use flatgeom::{Bounds, Coord, Layout};
//!
//! let mut bounds = Bounds::new(Layout::XY);
//! assert!(bounds.is_empty());
//!
//! bounds.extend(&Point::new(Layout::XY, vec![10., -10.]));
//! bounds.extend(&Point::new(Layout::XYZ, vec![0., 0., 5.]));
//! assert!(bounds.overlaps_point(Layout::XY, Coord::from([5., -5.])));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use bounds::Bounds;
pub use coord::{Coord, FlatCoord};
pub use error::{GeomError, GeomResult};
pub use flat::FlatCoords;
pub use layout::{Layout, Ordinate};

pub mod algorithm;
pub mod bounds;
pub mod coord;
pub mod error;
pub mod flat;
pub mod geometry;
pub mod layout;
#[cfg(test)]
pub(crate) mod test;
