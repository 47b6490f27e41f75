//! Named constant registry.
//!
//! Names are stored upper-case and matched case-insensitively by the
//! normalizer. Process-wide, read-only, built once at first use.

use std::collections::BTreeMap;
use std::f64::consts;
use std::sync::LazyLock;

static CONSTANTS: LazyLock<BTreeMap<&'static str, f64>> = LazyLock::new(|| {
    BTreeMap::from([
        ("E", consts::E),
        ("PHI", (1.0 + 5.0_f64.sqrt()) / 2.0),
        ("PI", consts::PI),
        ("SQRT2", consts::SQRT_2),
        ("TAU", consts::TAU),
    ])
});

/// Returns true if a constant with the given upper-case name exists.
#[must_use]
pub fn exists(name: &str) -> bool {
    CONSTANTS.contains_key(name)
}

/// Looks up a constant by its upper-case name.
#[must_use]
pub fn get(name: &str) -> Option<f64> {
    CONSTANTS.get(name).copied()
}

/// Returns all constant names in sorted order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CONSTANTS.keys().copied()
}
