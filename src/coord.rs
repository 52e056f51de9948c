use std::ops::Index;

use geo_traits::CoordTrait;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GeomError, GeomResult};
use crate::layout::{Layout, Ordinate};

/// Maximum number of ordinates a [`Coord`] can hold.
pub const MAX_ORDINATES: usize = 4;

/// A fixed-capacity tuple of up to four ordinates.
///
/// A `Coord` has no meaning without a [`Layout`] telling which ordinate lives where. Slots beyond
/// the values a constructor was given are always `0.0`, so two coords built from the same
/// ordinates compare equal.
///
/// Serialized as a sequence of ordinates. Non-finite values are written as the strings `"inf"`,
/// `"-inf"` and `"NaN"`, because formats like JSON have no number for them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coord(pub(crate) [f64; MAX_ORDINATES]);

impl Coord {
    /// Build a coord from up to four ordinates.
    ///
    /// # Errors
    ///
    /// - if more than four ordinates are given
    pub fn new(ordinates: &[f64]) -> GeomResult<Self> {
        if ordinates.len() > MAX_ORDINATES {
            return Err(GeomError::InvalidArgument(format!(
                "a coord holds at most {MAX_ORDINATES} ordinates, got {}",
                ordinates.len()
            )));
        }
        let mut values = [0.0; MAX_ORDINATES];
        values[..ordinates.len()].copy_from_slice(ordinates);
        Ok(Self(values))
    }

    /// The ordinates that are meaningful under `layout`.
    pub fn as_slice(&self, layout: Layout) -> &[f64] {
        &self.0[..layout.size()]
    }

    /// The value of `ordinate` when this coord is read under `layout`.
    pub fn get(&self, layout: Layout, ordinate: Ordinate) -> Option<f64> {
        layout.index(ordinate).map(|i| self.0[i])
    }

    /// Componentwise minimum over the first `layout.size()` ordinates.
    pub(crate) fn min(&self, other: &Coord, layout: Layout) -> Coord {
        let mut out = Coord::default();
        for i in 0..layout.size() {
            out.0[i] = self.0[i].min(other.0[i]);
        }
        out
    }

    /// Componentwise maximum over the first `layout.size()` ordinates.
    pub(crate) fn max(&self, other: &Coord, layout: Layout) -> Coord {
        let mut out = Coord::default();
        for i in 0..layout.size() {
            out.0[i] = self.0[i].max(other.0[i]);
        }
        out
    }
}

macro_rules! impl_from_array {
    ($n:literal) => {
        impl From<[f64; $n]> for Coord {
            fn from(value: [f64; $n]) -> Self {
                let mut values = [0.0; MAX_ORDINATES];
                values[..$n].copy_from_slice(&value);
                Self(values)
            }
        }
    };
}

impl_from_array!(2);
impl_from_array!(3);
impl_from_array!(4);

impl Index<usize> for Coord {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SerdeOrdinate {
    Number(f64),
    Text(String),
}

impl From<f64> for SerdeOrdinate {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Self::Number(value)
        } else if value.is_nan() {
            Self::Text("NaN".to_string())
        } else if value > 0. {
            Self::Text("inf".to_string())
        } else {
            Self::Text("-inf".to_string())
        }
    }
}

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().copied().map(SerdeOrdinate::from))
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let values = Vec::<SerdeOrdinate>::deserialize(deserializer)?
            .into_iter()
            .map(|value| match value {
                SerdeOrdinate::Number(v) => Ok(v),
                SerdeOrdinate::Text(text) => match text.as_str() {
                    "inf" => Ok(f64::INFINITY),
                    "-inf" => Ok(f64::NEG_INFINITY),
                    "NaN" => Ok(f64::NAN),
                    _ => Err(D::Error::custom(format!("invalid ordinate {text:?}"))),
                },
            })
            .collect::<Result<Vec<_>, _>>()?;
        Coord::new(&values).map_err(D::Error::custom)
    }
}

/// A single point borrowed out of a flat coordinate sequence.
///
/// This implements [CoordTrait], which you can use to extract data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCoord<'a> {
    pub(crate) coords: &'a [f64],
    pub(crate) layout: Layout,
}

impl<'a> FlatCoord<'a> {
    /// The layout this point is read under.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The raw ordinates of this point, `layout().size()` values long.
    pub fn ordinates(&self) -> &'a [f64] {
        self.coords
    }

    /// Copy this point into an owned [`Coord`].
    pub fn to_coord(&self) -> Coord {
        let mut values = [0.0; MAX_ORDINATES];
        values[..self.coords.len()].copy_from_slice(self.coords);
        Coord(values)
    }
}

impl CoordTrait for FlatCoord<'_> {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        self.layout.into()
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        debug_assert!(n < self.layout.size());
        self.coords[n]
    }

    fn x(&self) -> Self::T {
        self.coords[0]
    }

    fn y(&self) -> Self::T {
        self.coords[1]
    }
}

impl CoordTrait for &FlatCoord<'_> {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        self.layout.into()
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        debug_assert!(n < self.layout.size());
        self.coords[n]
    }

    fn x(&self) -> Self::T {
        self.coords[0]
    }

    fn y(&self) -> Self::T {
        self.coords[1]
    }
}
