use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GeomError, GeomResult};

/// One kind of ordinate a coordinate may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ordinate {
    /// First horizontal ordinate.
    X,

    /// Second horizontal ordinate.
    Y,

    /// Elevation.
    Z,

    /// Measure.
    M,
}

/// The ordinate layout of a coordinate sequence.
///
/// The layout fixes how many values each point occupies in a flat coordinate sequence (its
/// stride) and where each [`Ordinate`] lives within a point. Every layout carries the two
/// horizontal ordinates at positions 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Layout {
    /// Returns the number of ordinates per point.
    pub fn size(&self) -> usize {
        match self {
            Layout::XY => 2,
            Layout::XYZ => 3,
            Layout::XYM => 3,
            Layout::XYZM => 4,
        }
    }

    /// Position of `ordinate` within a point, or `None` if this layout does not carry it.
    pub fn index(&self, ordinate: Ordinate) -> Option<usize> {
        match (self, ordinate) {
            (_, Ordinate::X) => Some(0),
            (_, Ordinate::Y) => Some(1),
            (Layout::XYZ | Layout::XYZM, Ordinate::Z) => Some(2),
            (Layout::XYM, Ordinate::M) => Some(2),
            (Layout::XYZM, Ordinate::M) => Some(3),
            _ => None,
        }
    }

    /// Position of the elevation ordinate, if present.
    pub fn z_index(&self) -> Option<usize> {
        self.index(Ordinate::Z)
    }

    /// Position of the measure ordinate, if present.
    pub fn m_index(&self) -> Option<usize> {
        self.index(Ordinate::M)
    }

    /// The ordinates carried by this layout, in storage order.
    pub fn ordinates(&self) -> &'static [Ordinate] {
        use Ordinate::*;

        match self {
            Layout::XY => &[X, Y],
            Layout::XYZ => &[X, Y, Z],
            Layout::XYM => &[X, Y, M],
            Layout::XYZM => &[X, Y, Z, M],
        }
    }

    /// Ordinates carried by both layouts, with their position in `self` and in `other`.
    pub fn shared(&self, other: Layout) -> impl Iterator<Item = (Ordinate, usize, usize)> {
        let this = *self;
        this.ordinates()
            .iter()
            .enumerate()
            .filter_map(move |(i, ordinate)| other.index(*ordinate).map(|j| (*ordinate, i, j)))
    }
}

impl From<Layout> for geo_traits::Dimensions {
    fn from(value: Layout) -> Self {
        match value {
            Layout::XY => geo_traits::Dimensions::Xy,
            Layout::XYZ => geo_traits::Dimensions::Xyz,
            Layout::XYM => geo_traits::Dimensions::Xym,
            Layout::XYZM => geo_traits::Dimensions::Xyzm,
        }
    }
}

impl TryFrom<geo_traits::Dimensions> for Layout {
    type Error = GeomError;

    fn try_from(value: geo_traits::Dimensions) -> GeomResult<Self> {
        match value {
            geo_traits::Dimensions::Xy | geo_traits::Dimensions::Unknown(2) => Ok(Layout::XY),
            geo_traits::Dimensions::Xyz | geo_traits::Dimensions::Unknown(3) => Ok(Layout::XYZ),
            geo_traits::Dimensions::Xym => Ok(Layout::XYM),
            geo_traits::Dimensions::Xyzm | geo_traits::Dimensions::Unknown(4) => Ok(Layout::XYZM),
            _ => Err(GeomError::UnsupportedLayout(format!(
                "Unsupported dimension {value:?}"
            ))),
        }
    }
}

/// Picks a layout by stride. A stride of 3 is taken to mean elevation, not measure.
impl TryFrom<usize> for Layout {
    type Error = GeomError;

    fn try_from(value: usize) -> GeomResult<Self> {
        match value {
            2 => Ok(Layout::XY),
            3 => Ok(Layout::XYZ),
            4 => Ok(Layout::XYZM),
            _ => Err(GeomError::UnsupportedLayout(format!(
                "No layout has stride {value}"
            ))),
        }
    }
}

impl FromStr for Layout {
    type Err = GeomError;

    fn from_str(s: &str) -> GeomResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "XY" => Ok(Layout::XY),
            "XYZ" => Ok(Layout::XYZ),
            "XYM" => Ok(Layout::XYM),
            "XYZM" => Ok(Layout::XYZM),
            _ => Err(GeomError::UnsupportedLayout(s.to_string())),
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::XY => write!(f, "XY"),
            Layout::XYZ => write!(f, "XYZ"),
            Layout::XYM => write!(f, "XYM"),
            Layout::XYZM => write!(f, "XYZM"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stride_and_indices() {
        assert_eq!(Layout::XY.size(), 2);
        assert_eq!(Layout::XYZ.size(), 3);
        assert_eq!(Layout::XYM.size(), 3);
        assert_eq!(Layout::XYZM.size(), 4);

        assert_eq!(Layout::XY.z_index(), None);
        assert_eq!(Layout::XY.m_index(), None);
        assert_eq!(Layout::XYZ.z_index(), Some(2));
        assert_eq!(Layout::XYM.m_index(), Some(2));
        assert_eq!(Layout::XYM.z_index(), None);
        assert_eq!(Layout::XYZM.z_index(), Some(2));
        assert_eq!(Layout::XYZM.m_index(), Some(3));
    }

    #[test]
    fn ordinates_match_indices() {
        for layout in [Layout::XY, Layout::XYZ, Layout::XYM, Layout::XYZM] {
            assert_eq!(layout.ordinates().len(), layout.size());
            for (i, ordinate) in layout.ordinates().iter().enumerate() {
                assert_eq!(layout.index(*ordinate), Some(i));
            }
        }
    }

    #[test]
    fn shared_ordinates() {
        let shared: Vec<_> = Layout::XYZ.shared(Layout::XYM).collect();
        assert_eq!(shared, vec![(Ordinate::X, 0, 0), (Ordinate::Y, 1, 1)]);

        let shared: Vec<_> = Layout::XYM.shared(Layout::XYZM).collect();
        assert_eq!(
            shared,
            vec![
                (Ordinate::X, 0, 0),
                (Ordinate::Y, 1, 1),
                (Ordinate::M, 2, 3)
            ]
        );

        let shared: Vec<_> = Layout::XYZM.shared(Layout::XYZ).collect();
        assert_eq!(
            shared,
            vec![
                (Ordinate::X, 0, 0),
                (Ordinate::Y, 1, 1),
                (Ordinate::Z, 2, 2)
            ]
        );
    }

    #[test]
    fn from_geo_traits_dimensions() {
        assert_eq!(
            Layout::try_from(geo_traits::Dimensions::Xym).unwrap(),
            Layout::XYM
        );
        assert_eq!(
            Layout::try_from(geo_traits::Dimensions::Unknown(4)).unwrap(),
            Layout::XYZM
        );
        assert!(Layout::try_from(geo_traits::Dimensions::Unknown(5)).is_err());

        for layout in [Layout::XY, Layout::XYZ, Layout::XYM, Layout::XYZM] {
            let dims: geo_traits::Dimensions = layout.into();
            assert_eq!(Layout::try_from(dims).unwrap(), layout);
        }
    }

    #[test]
    fn from_stride() {
        assert_eq!(Layout::try_from(2).unwrap(), Layout::XY);
        assert_eq!(Layout::try_from(3).unwrap(), Layout::XYZ);
        assert_eq!(Layout::try_from(4).unwrap(), Layout::XYZM);
        assert!(matches!(
            Layout::try_from(5),
            Err(GeomError::UnsupportedLayout(_))
        ));
    }

    #[test]
    fn parse_and_display() {
        for layout in [Layout::XY, Layout::XYZ, Layout::XYM, Layout::XYZM] {
            assert_eq!(layout.to_string().parse::<Layout>().unwrap(), layout);
        }
        assert_eq!("xyzm".parse::<Layout>().unwrap(), Layout::XYZM);
        assert!("XZ".parse::<Layout>().is_err());
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&Layout::XYM).unwrap(), "\"XYM\"");
        let layout: Layout = serde_json::from_str("\"XYZ\"").unwrap();
        assert_eq!(layout, Layout::XYZ);
    }
}
