//! Filter-then-forecast driver.
//!
//! **Not part of the public API.**

use ndarray::Array1;
use tracing::{debug, debug_span, info};

use crate::design::{DesignComposer, LaggedSeries};
use crate::discretize::discretize;
use crate::error::DlmError;
use crate::forecast::Forecast;
use crate::hyperparams::Hyperparameters;
use crate::series::fit_to_length;
use crate::spec::ForecastSpec;
use crate::update::{Prior, bayesian_update};

/// Runs the full pipeline:
/// 1. Validate inputs
/// 2. Augment hyperparameters and pad/truncate each present series
/// 3. Fit phase: predict, then absorb each observation
/// 4. Forecast phase: propagate the mean with `F`, feeding predictions
///    back in as lag history
#[tracing::instrument(
    skip_all,
    fields(n = x.len(), ar_terms = spec.ar_terms(), cut = spec.cut(), pred = spec.pred())
)]
pub(crate) fn run_forecast(
    spec: &ForecastSpec,
    x: &[f64],
    hyper: &Hyperparameters,
    base_phi: &Array1<f64>,
    y: &[f64],
    z: &[f64],
) -> Result<Forecast, DlmError> {
    // 1. Validate
    spec.validate()?;
    if x.is_empty() {
        return Err(DlmError::EmptySeries);
    }
    for (what, s) in [("x", x), ("y", y), ("z", z)] {
        if s.iter().any(|v| !v.is_finite()) {
            return Err(DlmError::NonFiniteData { what });
        }
    }
    if base_phi.iter().any(|v| !v.is_finite()) {
        return Err(DlmError::NonFiniteData { what: "base design vector" });
    }
    let fit_len = x
        .len()
        .checked_sub(spec.cut())
        .ok_or(DlmError::InvalidRange {
            requested: spec.cut(),
            len: x.len(),
        })?;
    let horizon = fit_len + spec.pred();
    let p = spec.ar_terms();

    // 2. Augment once per present series; prepare each to the full horizon
    let mut hyper = hyper.clone();
    let mut prepared: [Vec<f64>; 3] = Default::default();
    let mut widths = [0usize; 3];
    for (i, s) in [x, y, z].into_iter().enumerate() {
        if s.is_empty() {
            continue;
        }
        hyper = hyper.augment(p);
        prepared[i] = fit_to_length(s, horizon)?;
        widths[i] = p;
    }

    let mut composer = DesignComposer::new(base_phi, widths);
    if composer.len() != hyper.dim() {
        return Err(DlmError::DimensionMismatch {
            what: "design vector",
            expected: hyper.dim(),
            got: composer.len(),
        });
    }
    debug!(d = hyper.dim(), fit_len, horizon, "model prepared");

    let f = hyper.transition();
    let noise = hyper.noise();
    let mut state = Prior::new(hyper.mean().clone(), hyper.cov().clone());
    let mut predictions = Vec::with_capacity(horizon);
    let mut residuals = Vec::with_capacity(fit_len);

    let [px, py, pz] = &prepared;

    // 3. Fit phase
    {
        let _span = debug_span!("fit", fit_len).entered();
        for t in 0..fit_len {
            let series = [
                LaggedSeries::new(px, widths[0]),
                LaggedSeries::new(py, widths[1]),
                LaggedSeries::new(pz, widths[2]),
            ];
            let phi = composer.compose(&series, t as isize);
            let raw = phi.dot(&f.dot(&state.mean));
            predictions.push(discretize(raw));

            let post = bayesian_update(px[t], &state, phi, f, noise, spec.discount())?;
            residuals.push(post.residual);
            state = post.into();
        }
    }

    // 4. Forecast phase. The working buffer holds observed history followed
    // by fed-back predictions; windows at `t` only read indices below `t`.
    {
        let _span = debug_span!("forecast", steps = spec.pred()).entered();
        let mut work = vec![0.0; horizon];
        work[..fit_len].copy_from_slice(&x[..fit_len]);
        let mut projected = state.mean.clone();

        for t in fit_len..horizon {
            projected = f.dot(&projected);
            let raw = {
                let series = [
                    LaggedSeries::new(&work, widths[0]),
                    LaggedSeries::new(py, widths[1]),
                    LaggedSeries::new(pz, widths[2]),
                ];
                composer.compose(&series, t as isize).dot(&projected)
            };
            let value = discretize(raw);
            predictions.push(value);
            work[t] = value;
        }
    }

    info!(
        d = hyper.dim(),
        fitted = fit_len,
        forecast = horizon - fit_len,
        "forecast complete"
    );

    Ok(Forecast::new(predictions, residuals, fit_len, state, hyper))
}
