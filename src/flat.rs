//! The read contract between geometry-shaped data and the bounding box engine.

use tracing::debug;

use crate::coord::FlatCoord;
use crate::error::{GeomError, GeomResult};
use crate::layout::Layout;

/// Geometry-shaped data exposed as a flat, point-major ordinate sequence.
///
/// A single point exposes `layout().size()` ordinates. A nested shape (such as a polygon with
/// holes) additionally exposes the cumulative end offset of each ring within
/// [`flat_coords`][Self::flat_coords], so ring `i` spans `ends[i - 1]..ends[i]` (with an implicit
/// leading `0`).
pub trait FlatCoords {
    /// The ordinate layout of [`flat_coords`][Self::flat_coords].
    fn layout(&self) -> Layout;

    /// All ordinates, point after point.
    fn flat_coords(&self) -> &[f64];

    /// Cumulative end offsets of each ring, or `None` for a flat shape.
    fn ends(&self) -> Option<&[usize]> {
        None
    }

    /// Number of ordinates per point.
    fn stride(&self) -> usize {
        self.layout().size()
    }

    /// Whether this source is split into rings.
    fn is_nested(&self) -> bool {
        self.ends().is_some()
    }

    /// Number of points across all rings.
    fn num_coords(&self) -> usize {
        self.flat_coords().len() / self.stride()
    }

    /// Access the point at index `i`.
    fn coord(&self, i: usize) -> Option<FlatCoord<'_>> {
        let stride = self.stride();
        let start = i.checked_mul(stride)?;
        let end = start.checked_add(stride)?;
        let coords = self.flat_coords().get(start..end)?;
        Some(FlatCoord {
            coords,
            layout: self.layout(),
        })
    }

    /// Iterate over every point, ring after ring.
    fn coords(&self) -> impl Iterator<Item = FlatCoord<'_>> {
        let layout = self.layout();
        self.flat_coords()
            .chunks_exact(self.stride())
            .map(move |coords| FlatCoord { coords, layout })
    }

    /// Number of rings. A flat source counts as a single ring when it holds any points.
    fn num_rings(&self) -> usize {
        match self.ends() {
            Some(ends) => ends.len(),
            None => usize::from(!self.flat_coords().is_empty()),
        }
    }

    /// The flat ordinates of ring `i`.
    fn ring(&self, i: usize) -> Option<&[f64]> {
        match self.ends() {
            Some(ends) => {
                let end = *ends.get(i)?;
                let start = if i == 0 { 0 } else { ends[i - 1] };
                self.flat_coords().get(start..end)
            }
            None if i == 0 && !self.flat_coords().is_empty() => Some(self.flat_coords()),
            None => None,
        }
    }
}

impl<T: FlatCoords + ?Sized> FlatCoords for &T {
    fn layout(&self) -> Layout {
        (**self).layout()
    }

    fn flat_coords(&self) -> &[f64] {
        (**self).flat_coords()
    }

    fn ends(&self) -> Option<&[usize]> {
        (**self).ends()
    }
}

/// Validate a flat coordinate sequence against its layout and ring ends.
///
/// # Errors
///
/// - if the number of ordinates is not a multiple of the layout stride
/// - if a ring end is not a multiple of the stride
/// - if ring ends decrease
/// - if a ring end lies beyond the ordinates, or the last end does not cover them all
pub fn check(layout: Layout, flat_coords: &[f64], ends: Option<&[usize]>) -> GeomResult<()> {
    let stride = layout.size();
    if flat_coords.len() % stride != 0 {
        debug!(
            len = flat_coords.len(),
            stride, "flat coordinate length is not a multiple of the stride"
        );
        return Err(GeomError::InvalidArgument(format!(
            "{} ordinates is not a multiple of the {layout} stride {stride}",
            flat_coords.len()
        )));
    }

    let Some(ends) = ends else {
        return Ok(());
    };

    let mut previous = 0;
    for (i, end) in ends.iter().copied().enumerate() {
        if end % stride != 0 {
            debug!(ring = i, end, stride, "ring end splits a point");
            return Err(GeomError::InvalidArgument(format!(
                "ring {i} ends at {end}, which is not a multiple of the {layout} stride {stride}"
            )));
        }
        if end < previous {
            debug!(ring = i, end, previous, "ring ends decrease");
            return Err(GeomError::InvalidArgument(format!(
                "ring {i} ends at {end}, before the previous ring end {previous}"
            )));
        }
        if end > flat_coords.len() {
            debug!(ring = i, end, len = flat_coords.len(), "ring end out of range");
            return Err(GeomError::InvalidArgument(format!(
                "ring {i} ends at {end}, beyond the {} available ordinates",
                flat_coords.len()
            )));
        }
        previous = end;
    }

    if previous != flat_coords.len() {
        debug!(
            last_end = previous,
            len = flat_coords.len(),
            "ring ends leave trailing ordinates"
        );
        return Err(GeomError::InvalidArgument(format!(
            "largest ring end {previous} must match the {} available ordinates",
            flat_coords.len()
        )));
    }

    Ok(())
}
