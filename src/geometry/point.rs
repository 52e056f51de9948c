use crate::error::{GeomError, GeomResult};
use crate::flat::{check, FlatCoords};
use crate::layout::Layout;

/// A single point stored as one stride of ordinates.
///
/// A point with no ordinates is the empty point.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    layout: Layout,
    flat_coords: Vec<f64>,
}

impl Point {
    /// Create a new Point from its ordinates.
    ///
    /// # Panics
    ///
    /// - if `flat_coords` is neither empty nor exactly one stride long
    pub fn new(layout: Layout, flat_coords: Vec<f64>) -> Self {
        Self::try_new(layout, flat_coords).unwrap()
    }

    /// Create a new Point from its ordinates.
    ///
    /// # Errors
    ///
    /// - if `flat_coords` splits a point, see [`check`]
    /// - if `flat_coords` is neither empty nor exactly one stride long
    pub fn try_new(layout: Layout, flat_coords: Vec<f64>) -> GeomResult<Self> {
        check(layout, &flat_coords, None)?;
        if !flat_coords.is_empty() && flat_coords.len() != layout.size() {
            return Err(GeomError::InvalidArgument(format!(
                "a {layout} point needs {} ordinates, got {}",
                layout.size(),
                flat_coords.len()
            )));
        }
        Ok(Self {
            layout,
            flat_coords,
        })
    }

    /// The empty point.
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: vec![],
        }
    }

    /// Whether this point has no coordinate.
    pub fn is_empty(&self) -> bool {
        self.flat_coords.is_empty()
    }
}

impl FlatCoords for Point {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn flat_coords(&self) -> &[f64] {
        &self.flat_coords
    }
}
