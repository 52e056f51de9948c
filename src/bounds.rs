//! Axis-aligned bounding boxes over layout-aware coordinates.

use std::fmt::Display;

use geo_traits::{
    CoordTrait, GeometryCollectionTrait, GeometryTrait, GeometryType, LineStringTrait, LineTrait,
    MultiLineStringTrait, MultiPointTrait, MultiPolygonTrait, PointTrait, PolygonTrait, RectTrait,
    TriangleTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::coord::{Coord, MAX_ORDINATES};
use crate::error::{GeomError, GeomResult};
use crate::flat::{check, FlatCoords};
use crate::geometry::Polygon;
use crate::layout::{Layout, Ordinate};

/// An axis-aligned bounding box.
///
/// Emptiness is carried by the extrema themselves: a box is empty when its minimum X lies above
/// its maximum X. [`Bounds::new`] starts the horizontal ordinates at `min = +inf, max = -inf` and
/// every other ordinate at `0`, so a box stays well formed on Z and M even when it only ever sees
/// sources that lack them.
///
/// `Bounds` is `Copy`. Mutators take `&mut self`; passing a box by value hands out an independent
/// copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    layout: Layout,
    min: Coord,
    max: Coord,
}

impl Bounds {
    /// The empty box for `layout`.
    ///
    /// Only X and Y hold the empty sentinels. Z and M start at `0`, so their extent after
    /// extension always includes `0`.
    pub fn new(layout: Layout) -> Self {
        let mut min = Coord::default();
        let mut max = Coord::default();
        min.0[..2].fill(f64::INFINITY);
        max.0[..2].fill(f64::NEG_INFINITY);
        Self { layout, min, max }
    }

    /// Build a box from `layout.size()` minimum ordinates followed by `layout.size()` maximum
    /// ordinates.
    ///
    /// # Errors
    ///
    /// - if `ordinates` is not exactly twice the layout stride long
    pub fn from_ordinates(layout: Layout, ordinates: &[f64]) -> GeomResult<Self> {
        let mut bounds = Self::new(layout);
        bounds.set(ordinates)?;
        Ok(bounds)
    }

    /// Build a box spanning two corners, in either order.
    pub fn from_coords(layout: Layout, a: Coord, b: Coord) -> Self {
        let mut bounds = Self::new(layout);
        bounds.set_coords(a, b);
        bounds
    }

    /// The layout of this box.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The minimum corner.
    pub fn min_coord(&self) -> Coord {
        self.min
    }

    /// The maximum corner.
    pub fn max_coord(&self) -> Coord {
        self.max
    }

    /// The minimum of `ordinate`, if this box's layout carries it.
    pub fn min(&self, ordinate: Ordinate) -> Option<f64> {
        self.min.get(self.layout, ordinate)
    }

    /// The maximum of `ordinate`, if this box's layout carries it.
    pub fn max(&self, ordinate: Ordinate) -> Option<f64> {
        self.max.get(self.layout, ordinate)
    }

    /// Whether this box covers no point at all.
    ///
    /// Only the first horizontal ordinate is inspected.
    pub fn is_empty(&self) -> bool {
        self.min.0[0] > self.max.0[0]
    }

    /// Overwrite the box with `layout.size()` minimum ordinates followed by `layout.size()` maximum
    /// ordinates. The values are stored as given.
    ///
    /// # Errors
    ///
    /// - if `ordinates` is not exactly twice the layout stride long; the box is left untouched
    pub fn set(&mut self, ordinates: &[f64]) -> GeomResult<()> {
        let stride = self.layout.size();
        if ordinates.len() != 2 * stride {
            debug!(
                layout = %self.layout,
                expected = 2 * stride,
                actual = ordinates.len(),
                "rejecting bounds ordinates"
            );
            return Err(GeomError::InvalidArgument(format!(
                "{} bounds need {} ordinates, got {}",
                self.layout,
                2 * stride,
                ordinates.len()
            )));
        }

        let (min, max) = ordinates.split_at(stride);
        self.min.0[..stride].copy_from_slice(min);
        self.max.0[..stride].copy_from_slice(max);
        Ok(())
    }

    /// Overwrite the box so it spans the corners `a` and `b`.
    ///
    /// The corners may come in any order: each ordinate of the stored minimum is the smaller of
    /// the two inputs and each ordinate of the stored maximum the larger.
    pub fn set_coords(&mut self, a: Coord, b: Coord) {
        self.min = a.min(&b, self.layout);
        self.max = a.max(&b, self.layout);
    }

    /// Grow the box to cover every point of `source`.
    ///
    /// Rings of a nested source all count the same. Only ordinates carried by both this box and
    /// the source are read or written, so a 3D box extended by 2D points grows horizontally only.
    pub fn extend(&mut self, source: &impl FlatCoords) -> &mut Self {
        let source_layout = source.layout();
        let shared = shared_indices(self.layout, source_layout);

        let points = source.flat_coords().chunks_exact(source_layout.size());
        if !points.remainder().is_empty() {
            debug!(
                layout = %source_layout,
                skipped = points.remainder().len(),
                "ignoring trailing ordinates of a partial point"
            );
        }
        for point in points {
            for (i, j) in shared.iter() {
                self.add_ordinate(*i, point[*j]);
            }
        }
        self
    }

    /// Like [`extend`][Self::extend], but first checks that `source` honours the flat coordinate
    /// contract.
    ///
    /// # Errors
    ///
    /// - if `source` violates the contract described in [`check`]; the box is left untouched
    pub fn try_extend(&mut self, source: &impl FlatCoords) -> GeomResult<&mut Self> {
        check(source.layout(), source.flat_coords(), source.ends())?;
        Ok(self.extend(source))
    }

    /// Grow the box to cover `other`. An empty `other` leaves the box unchanged.
    pub fn extend_bounds(&mut self, other: &Bounds) -> &mut Self {
        if other.is_empty() {
            return self;
        }
        for (i, j) in shared_indices(self.layout, other.layout).iter() {
            self.add_ordinate(*i, other.min.0[*j]);
            self.add_ordinate(*i, other.max.0[*j]);
        }
        self
    }

    /// Grow the box to cover every coordinate of a georust geometry.
    ///
    /// Each coordinate is read under the layout its own dimension maps to; coordinates whose
    /// dimension has no [`Layout`] contribute their horizontal ordinates only.
    pub fn extend_geometry(&mut self, geometry: &impl GeometryTrait<T = f64>) -> &mut Self {
        match geometry.as_type() {
            GeometryType::Point(g) => self.add_point(g),
            GeometryType::LineString(g) => self.add_line_string(g),
            GeometryType::Polygon(g) => self.add_polygon(g),
            GeometryType::MultiPoint(g) => self.add_multi_point(g),
            GeometryType::MultiLineString(g) => self.add_multi_line_string(g),
            GeometryType::MultiPolygon(g) => self.add_multi_polygon(g),
            GeometryType::GeometryCollection(g) => self.add_geometry_collection(g),
            GeometryType::Rect(g) => self.add_rect(g),
            GeometryType::Triangle(g) => self.add_triangle(g),
            GeometryType::Line(g) => self.add_line(g),
        }
        self
    }

    /// Whether this box and `other` share at least one point.
    ///
    /// Compared over the ordinates carried by `layout`, by this box and by `other`. Intervals are
    /// closed, so touching boxes overlap, and comparison is exact. An empty box overlaps nothing.
    pub fn overlaps(&self, layout: Layout, other: &Bounds) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        for ordinate in layout.ordinates() {
            let (Some(i), Some(j)) = (self.layout.index(*ordinate), other.layout.index(*ordinate))
            else {
                continue;
            };
            if self.min.0[i] > other.max.0[j] || other.min.0[j] > self.max.0[i] {
                return false;
            }
        }
        true
    }

    /// Whether `point`, read under `layout`, lies inside this closed box.
    ///
    /// Compared over the ordinates carried by both `layout` and this box, with exact comparison.
    /// An empty box contains no point.
    pub fn overlaps_point(&self, layout: Layout, point: Coord) -> bool {
        if self.is_empty() {
            return false;
        }
        shared_indices(self.layout, layout)
            .iter()
            .all(|(i, j)| self.min.0[*i] <= point.0[*j] && point.0[*j] <= self.max.0[*i])
    }

    /// The horizontal extent as a closed, counter-clockwise `XY` ring starting at the minimum
    /// corner. An empty box gives a polygon without rings.
    pub fn to_polygon(&self) -> Polygon {
        if self.is_empty() {
            return Polygon::empty(Layout::XY);
        }
        let (minx, miny) = (self.min.0[0], self.min.0[1]);
        let (maxx, maxy) = (self.max.0[0], self.max.0[1]);
        let flat_coords = vec![minx, miny, maxx, miny, maxx, maxy, minx, maxy, minx, miny];
        let ends = vec![flat_coords.len()];
        Polygon::new(Layout::XY, flat_coords, ends)
    }

    fn add_ordinate(&mut self, i: usize, value: f64) {
        if value < self.min.0[i] {
            self.min.0[i] = value;
        }
        if value > self.max.0[i] {
            self.max.0[i] = value;
        }
    }

    fn add_coord(&mut self, coord: &impl CoordTrait<T = f64>) {
        let dim = coord.dim();
        let Ok(layout) = Layout::try_from(dim) else {
            trace!(?dim, "reading horizontal ordinates only");
            self.add_ordinate(0, coord.x());
            self.add_ordinate(1, coord.y());
            return;
        };
        for (i, j) in shared_indices(self.layout, layout).iter() {
            self.add_ordinate(*i, coord.nth_or_panic(*j));
        }
    }

    fn add_point(&mut self, point: &impl PointTrait<T = f64>) {
        if let Some(coord) = point.coord() {
            self.add_coord(&coord);
        }
    }

    fn add_line_string(&mut self, line_string: &impl LineStringTrait<T = f64>) {
        for coord in line_string.coords() {
            self.add_coord(&coord);
        }
    }

    fn add_polygon(&mut self, polygon: &impl PolygonTrait<T = f64>) {
        if let Some(exterior_ring) = polygon.exterior() {
            self.add_line_string(&exterior_ring);
        }

        for interior in polygon.interiors() {
            self.add_line_string(&interior)
        }
    }

    fn add_multi_point(&mut self, multi_point: &impl MultiPointTrait<T = f64>) {
        for point in multi_point.points() {
            self.add_point(&point);
        }
    }

    fn add_multi_line_string(&mut self, multi_line_string: &impl MultiLineStringTrait<T = f64>) {
        for line_string in multi_line_string.line_strings() {
            self.add_line_string(&line_string);
        }
    }

    fn add_multi_polygon(&mut self, multi_polygon: &impl MultiPolygonTrait<T = f64>) {
        for polygon in multi_polygon.polygons() {
            self.add_polygon(&polygon);
        }
    }

    fn add_geometry_collection(
        &mut self,
        geometry_collection: &impl GeometryCollectionTrait<T = f64>,
    ) {
        for geometry in geometry_collection.geometries() {
            self.extend_geometry(&geometry);
        }
    }

    fn add_rect(&mut self, rect: &impl RectTrait<T = f64>) {
        self.add_coord(&rect.min());
        self.add_coord(&rect.max());
    }

    fn add_triangle(&mut self, triangle: &impl TriangleTrait<T = f64>) {
        self.add_coord(&triangle.first());
        self.add_coord(&triangle.second());
        self.add_coord(&triangle.third());
    }

    fn add_line(&mut self, line: &impl LineTrait<T = f64>) {
        self.add_coord(&line.start());
        self.add_coord(&line.end());
    }
}

/// Pairs of (position in `target`, position in `source`) for each ordinate both layouts carry.
fn shared_indices(target: Layout, source: Layout) -> SharedIndices {
    let mut out = SharedIndices::default();
    for (_, i, j) in target.shared(source) {
        out.pairs[out.len] = (i, j);
        out.len += 1;
    }
    out
}

#[derive(Debug, Default)]
struct SharedIndices {
    pairs: [(usize, usize); MAX_ORDINATES],
    len: usize,
}

impl SharedIndices {
    fn iter(&self) -> std::slice::Iter<'_, (usize, usize)> {
        self.pairs[..self.len].iter()
    }
}

impl TryFrom<Bounds> for geo_types::Rect<f64> {
    type Error = GeomError;

    fn try_from(value: Bounds) -> GeomResult<Self> {
        if value.is_empty() {
            return Err(GeomError::InvalidArgument(
                "an empty bounds has no rectangle".to_string(),
            ));
        }
        Ok(geo_types::Rect::new(
            geo_types::coord! { x: value.min.0[0], y: value.min.0[1] },
            geo_types::coord! { x: value.max.0[0], y: value.max.0[1] },
        ))
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "{} EMPTY", self.layout);
        }
        let join = |coord: &Coord| {
            coord
                .as_slice(self.layout)
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(
            f,
            "{}[({}), ({})]",
            self.layout,
            join(&self.min),
            join(&self.max)
        )
    }
}
