//! # Parstrip Curves
//!
//! Discount curve construction and global bootstrapping.
//!
//! This crate provides:
//!
//! - **Schedules**: backward-rolled accrual schedules with stub handling
//! - **Curves**: immutable discount factor curves with pluggable
//!   interpolation
//! - **Instruments**: cash deposits and par swaps that price off a curve
//! - **Bootstrap**: global calibration fitting all pillars at once with a
//!   derivative-free minimizer
//!
//! ## Quick Start
//!
//! ```rust
//! use parstrip_core::prelude::*;
//! use parstrip_curves::prelude::*;
//!
//! let valuation = Date::from_ymd(2014, 4, 1)?;
//! let cash = Cash::new(
//!     valuation,
//!     valuation.add_days(180),
//!     1.0,
//!     0.010,
//!     DayCount::parse("A/360")?,
//! )?;
//!
//! let curve = Bootstrapper::new(valuation).add_instrument(cash).bootstrap()?;
//! assert_eq!(curve.discount_factor(valuation)?, 1.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

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
#![allow(clippy::uninlined_format_args)]

pub mod bootstrap;
pub mod curve;
pub mod error;
pub mod instruments;
pub mod interpolation;
pub mod schedule;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{BootstrapDiagnostics, Bootstrapper};
    pub use crate::curve::{DiscountCurve, DiscountCurveBuilder};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::instruments::{Cash, Instrument, Swap};
    pub use crate::interpolation::InterpolationMethod;
    pub use crate::schedule::{Schedule, ScheduleBuilder, StubPolicy};
}

pub use error::{CurveError, CurveResult};
