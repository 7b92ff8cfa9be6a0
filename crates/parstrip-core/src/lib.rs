//! # Parstrip Core
//!
//! Core types for the Parstrip curve bootstrapping library.
//!
//! This crate provides the foundational building blocks used throughout
//! Parstrip:
//!
//! - **Types**: Domain-specific types like [`Date`] and [`Tenor`]
//! - **Day Count Conventions**: Year-fraction calculations for accrual
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Conventions are parsed once into closed enums, never
//!   re-inspected as strings at valuation time
//! - **Explicit Over Implicit**: Fallible operations return `Result`
//!
//! ## Example
//!
//! ```rust
//! use parstrip_core::prelude::*;
//!
//! let start = Date::from_ymd(2014, 4, 1).unwrap();
//! let end = "6m".parse::<Tenor>().unwrap().add_to(start).unwrap();
//! let yf = DayCount::parse("A/360").unwrap().year_fraction(start, end);
//! assert!(yf > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod types;

pub use daycounts::{year_fraction, DayCount};
pub use error::{CoreError, CoreResult};
pub use types::{Date, Tenor, TenorUnit};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{year_fraction, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, Tenor, TenorUnit};
}
