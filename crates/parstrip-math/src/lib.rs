//! # Parstrip Math
//!
//! Numerical routines for the Parstrip curve bootstrapping library.
//!
//! This crate provides:
//!
//! - **Interpolation**: Linear and natural cubic spline interpolation over
//!   sorted knots
//! - **Optimization**: Derivative-free minimization (Powell's direction-set
//!   method) behind the [`optimization::Minimizer`] trait
//!
//! The routines here are deliberately free of any financial vocabulary; they
//! operate on plain `f64` coordinates and parameter vectors so the curve
//! layer can choose its own axes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::if_not_else)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod optimization;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{CubicSpline, Interpolator, LinearInterpolator};
    pub use crate::optimization::{Minimizer, MinimizerResult, PowellConfig, PowellMinimizer};
}

pub use error::{MathError, MathResult};
