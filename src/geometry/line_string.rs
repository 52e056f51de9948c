use crate::error::GeomResult;
use crate::flat::{check, FlatCoords};
use crate::layout::Layout;

/// An open or closed path stored as a flat coordinate sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    layout: Layout,
    flat_coords: Vec<f64>,
}

impl LineString {
    /// Create a new LineString from its flat ordinates.
    ///
    /// # Panics
    ///
    /// - if the number of ordinates is not a multiple of the layout stride
    pub fn new(layout: Layout, flat_coords: Vec<f64>) -> Self {
        Self::try_new(layout, flat_coords).unwrap()
    }

    /// Create a new LineString from its flat ordinates.
    ///
    /// # Errors
    ///
    /// - if the number of ordinates is not a multiple of the layout stride
    pub fn try_new(layout: Layout, flat_coords: Vec<f64>) -> GeomResult<Self> {
        check(layout, &flat_coords, None)?;
        Ok(Self {
            layout,
            flat_coords,
        })
    }

    /// Whether the first and last points coincide.
    pub fn is_closed(&self) -> bool {
        let n = self.num_coords();
        match (self.coord(0), n.checked_sub(1).and_then(|last| self.coord(last))) {
            (Some(first), Some(last)) => first.ordinates() == last.ordinates(),
            _ => false,
        }
    }
}

impl FlatCoords for LineString {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn flat_coords(&self) -> &[f64] {
        &self.flat_coords
    }
}
