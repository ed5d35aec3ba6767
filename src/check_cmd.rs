//! Check command: report missing values in the selected input columns.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use dlmcast_io::read_columns;
use dlmcast_scale::has_nulls;

use crate::cli::CheckArgs;
use crate::config;

/// Run the missing-value check. Fails if any selected column has a null.
pub fn run(args: CheckArgs) -> Result<()> {
    let _cmd = info_span!("check").entered();
    let config = config::load(&args.config)?;

    let input = config
        .io
        .input
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no input path: set [io].input in config"))?;

    info!(path = %input.display(), "reading input series");
    let table = read_columns(input, &config.io.columns.selected())
        .with_context(|| format!("failed to read Parquet: {}", input.display()))?;

    if has_nulls(table.columns()) {
        let counts: Vec<String> = table
            .names()
            .iter()
            .zip(table.columns())
            .filter_map(|(name, col)| {
                let n = col.iter().filter(|v| v.is_nan()).count();
                (n > 0).then(|| format!("{name} ({n})"))
            })
            .collect();
        bail!("missing values found: {}", counts.join(", "));
    }

    info!(
        columns = table.names().len(),
        rows = table.n_rows(),
        "no missing values"
    );
    Ok(())
}
