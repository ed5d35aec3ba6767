//! # dlmcast-dlm
//!
//! Recursive Bayesian filtering and forecasting for dynamic linear models
//! (DLMs) with optional autoregressive augmentation.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["Hyperparameters::new(m, B, F, Σ)?"] --> C
//!     B["ForecastSpec::new()"] -->|".run(&x, &hyper, &phi, &y, &z)?"| C["Forecast"]
//!     C --> D[".fitted() — one-step fits"]
//!     C --> E[".forecast() — multi-step forecasts"]
//!     C --> F[".residuals() / .state()"]
//! ```
//!
//! ## Building Blocks
//!
//! | Function | Role |
//! |----------|------|
//! | [`Hyperparameters::augment()`] | reserve `p` state slots for AR coefficients |
//! | [`prepare_series()`] | pad with the last value or truncate |
//! | [`lag_window()`] | `p` most recent values before `t`, zero-padded |
//! | [`compose_design()`] | base vector followed by lag windows |
//! | [`bayesian_update()`] | one conjugate posterior update |
//! | [`discretize()`] | round to a non-negative integer |
//!
//! ## Mathematical Glossary
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `m`, `B` | state mean and covariance |
//! | `F` | state transition matrix |
//! | `Σ` | process-noise matrix |
//! | `phi` | design (observation) vector |
//! | `δ` | discount factor |
//! | `Q` | one-step forecast variance |

mod design;
mod discretize;
mod error;
mod filter;
mod forecast;
mod hyperparams;
mod series;
mod spec;
mod update;

pub(crate) mod driver;
pub(crate) mod linalg;

pub use design::{DesignComposer, LaggedSeries, compose_design};
pub use discretize::discretize;
pub use error::DlmError;
pub use filter::filter_arma;
pub use forecast::Forecast;
pub use hyperparams::Hyperparameters;
pub use series::{fit_to_length, lag_window, prepare_series};
pub use spec::ForecastSpec;
pub use update::{Posterior, Prior, bayesian_update};
