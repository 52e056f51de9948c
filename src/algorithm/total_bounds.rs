#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::trace;

use crate::bounds::Bounds;
use crate::flat::FlatCoords;
use crate::layout::Layout;

/// Computes the total bounds (extent) of the input.
pub trait TotalBounds {
    /// The smallest box, under `layout`, covering every point of every geometry.
    fn total_bounds(&self, layout: Layout) -> Bounds;
}

impl<G: FlatCoords + Sync> TotalBounds for [G] {
    fn total_bounds(&self, layout: Layout) -> Bounds {
        trace!(geometries = self.len(), %layout, "computing total bounds");

        #[cfg(feature = "rayon")]
        {
            // Each worker folds into its own box; partial boxes are unioned.
            self.par_iter()
                .fold(
                    || Bounds::new(layout),
                    |mut bounds, geom| {
                        bounds.extend(geom);
                        bounds
                    },
                )
                .reduce(
                    || Bounds::new(layout),
                    |mut left, right| {
                        left.extend_bounds(&right);
                        left
                    },
                )
        }

        #[cfg(not(feature = "rayon"))]
        {
            let mut bounds = Bounds::new(layout);
            for geom in self {
                bounds.extend(geom);
            }
            bounds
        }
    }
}

impl<G: FlatCoords + Sync> TotalBounds for Vec<G> {
    fn total_bounds(&self, layout: Layout) -> Bounds {
        self.as_slice().total_bounds(layout)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{LineString, Point};
    use crate::test::{bounds, point, polygon};

    #[test]
    fn total_bounds_of_points() {
        let points = vec![point::p_xy(), point::p_xyz(), point::p_xym(), point::p_xyzm()];
        assert_eq!(
            points.total_bounds(Layout::XYZ),
            bounds(Layout::XYZ, &[-4., -10., -5., 10., 7., 30.])
        );
        assert_eq!(
            points.total_bounds(Layout::XY),
            bounds(Layout::XY, &[-4., -10., 10., 7.])
        );
    }

    #[test]
    fn total_bounds_of_flat_sources_under_z() {
        let points = vec![point::p_xy(), Point::new(Layout::XY, vec![-3., 4.])];
        let b = points.total_bounds(Layout::XYZ);
        assert_eq!(b, bounds(Layout::XYZ, &[-3., -10., 0., 10., 4., 0.]));
        assert!(b.overlaps_point(Layout::XYZ, crate::Coord::from([0., 0., 0.])));
    }

    #[test]
    fn total_bounds_of_polygons() {
        let polygons = [polygon::square_with_hole(), polygon::single_vertex_xyz()];
        assert_eq!(
            polygons.total_bounds(Layout::XY),
            bounds(Layout::XY, &[0., -10., 12., 10.])
        );
    }

    #[test]
    fn total_bounds_of_nothing_is_empty() {
        let empty: Vec<Point> = vec![];
        assert_eq!(empty.total_bounds(Layout::XYM), Bounds::new(Layout::XYM));

        let empties = vec![Point::empty(Layout::XY), Point::empty(Layout::XY)];
        assert!(empties.total_bounds(Layout::XY).is_empty());
    }

    #[test]
    fn matches_sequential_extend() {
        let lines: Vec<LineString> = (0..100)
            .map(|i| {
                let i = i as f64;
                LineString::new(Layout::XYZ, vec![i, -i, i * 2., i / 2., i * i, -i])
            })
            .collect();

        let mut expected = Bounds::new(Layout::XYZ);
        for line in lines.iter() {
            expected.extend(line);
        }
        assert_eq!(lines.total_bounds(Layout::XYZ), expected);
    }
}
