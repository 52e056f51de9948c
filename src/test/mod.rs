#![allow(dead_code)]


use crate::{Bounds, Layout};

/// Shorthand for a box built from min ordinates followed by max ordinates.
pub(crate) fn bounds(layout: Layout, ordinates: &[f64]) -> Bounds {
    Bounds::from_ordinates(layout, ordinates).unwrap()
}

/// Route `tracing` output through the test harness so rejected inputs show up with `--nocapture`.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
