use crate::error::GeomResult;
use crate::flat::{check, FlatCoords};
use crate::geometry::LineString;
use crate::layout::Layout;

/// A polygon stored as one flat coordinate sequence split into rings.
///
/// The first ring is the exterior, the rest are holes. `ends` holds the cumulative end offset of
/// each ring into `flat_coords`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    layout: Layout,
    flat_coords: Vec<f64>,
    ends: Vec<usize>,
}

impl Polygon {
    /// Create a new Polygon from parts
    ///
    /// # Panics
    ///
    /// - if the number of ordinates is not a multiple of the layout stride
    /// - if any ring end splits a point, decreases, or lies out of range
    /// - if the largest ring end does not match the number of ordinates
    pub fn new(layout: Layout, flat_coords: Vec<f64>, ends: Vec<usize>) -> Self {
        Self::try_new(layout, flat_coords, ends).unwrap()
    }

    /// Create a new Polygon from parts
    ///
    /// # Errors
    ///
    /// - if the number of ordinates is not a multiple of the layout stride
    /// - if any ring end splits a point, decreases, or lies out of range
    /// - if the largest ring end does not match the number of ordinates
    pub fn try_new(layout: Layout, flat_coords: Vec<f64>, ends: Vec<usize>) -> GeomResult<Self> {
        check(layout, &flat_coords, Some(ends.as_slice()))?;
        Ok(Self {
            layout,
            flat_coords,
            ends,
        })
    }

    /// The polygon with no rings.
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: vec![],
            ends: vec![],
        }
    }

    /// Copy ring `i` out as a [`LineString`].
    pub fn linear_ring(&self, i: usize) -> Option<LineString> {
        let ring = self.ring(i)?;
        LineString::try_new(self.layout, ring.to_vec()).ok()
    }
}

impl FlatCoords for Polygon {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn flat_coords(&self) -> &[f64] {
        &self.flat_coords
    }

    fn ends(&self) -> Option<&[usize]> {
        Some(self.ends.as_slice())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rings() {
        let polygon = Polygon::new(
            Layout::XY,
            vec![
                0., 0., 10., 0., 10., 10., 0., 0., // exterior
                2., 2., 3., 2., 3., 3., 2., 2., // hole
            ],
            vec![8, 16],
        );
        assert!(polygon.is_nested());
        assert_eq!(polygon.num_rings(), 2);
        assert_eq!(polygon.num_coords(), 8);
        assert_eq!(polygon.ring(1).unwrap(), &[2., 2., 3., 2., 3., 3., 2., 2.]);
        assert!(polygon.ring(2).is_none());

        let hole = polygon.linear_ring(1).unwrap();
        assert!(hole.is_closed());
        assert_eq!(hole.num_coords(), 4);
    }

    #[test]
    fn rejects_out_of_range_ends() {
        assert!(Polygon::try_new(Layout::XYZ, vec![5., -10., 3.], vec![6]).is_err());
        assert!(Polygon::try_new(Layout::XYZ, vec![5., -10., 3.], vec![2]).is_err());
        assert!(Polygon::try_new(Layout::XYZ, vec![5., -10., 3.], vec![3]).is_ok());
    }

    #[test]
    fn empty_polygon() {
        let polygon = Polygon::empty(Layout::XY);
        assert_eq!(polygon.num_rings(), 0);
        assert_eq!(polygon.num_coords(), 0);
        assert_eq!(polygon, Polygon::new(Layout::XY, vec![], vec![]));
    }
}
