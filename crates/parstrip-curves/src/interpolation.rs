//! Interpolation method selection for discount curves.

use serde::{Deserialize, Serialize};

/// Interpolation scheme applied to discount factors between pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpolationMethod {
    /// Linear interpolation on discount factors. Exact at pillars, which
    /// keeps the anchor factor of 1 at the valuation date exact.
    #[default]
    Linear,

    /// Natural cubic spline on discount factors.
    CubicSpline,
}

impl InterpolationMethod {
    /// Minimum number of pillars the method needs.
    #[must_use]
    pub fn min_pillars(&self) -> usize {
        match self {
            Self::Linear => 2,
            Self::CubicSpline => 3,
        }
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Linear => "Linear",
            Self::CubicSpline => "Cubic Spline",
        };
        write!(f, "{name}")
    }
}
