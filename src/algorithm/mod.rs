//! Algorithms built on top of [`Bounds`][crate::Bounds].

mod total_bounds;

pub use total_bounds::TotalBounds;
