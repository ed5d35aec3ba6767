//! Preprocessing and diagnostics helpers for dlmcast.
//!
//! - [`MinMaxScaler`] / [`scale`]: rescale a series onto `[0, 1]` and back.
//! - [`has_nulls`]: NaN detection across a table of columns.
//! - [`mean`], [`mean_absolute_error`], [`root_mean_squared_error`]: fit
//!   diagnostics.

mod error;
mod metrics;
mod minmax;

pub use error::ScaleError;
pub use metrics::{has_nulls, mean, mean_absolute_error, root_mean_squared_error};
pub use minmax::{MinMaxScaler, scale};
