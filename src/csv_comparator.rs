// csv_comparator.rs
use crate::config::Config;
use crate::csv_inspector::{count_positive, sign_counts, SignCounts};
use crate::csv_joiner::{inner_join, JoinReport};
use crate::csv_manager::{load, RequiredColumns};
use crate::csv_table::Table;
use crate::csv_transformer::{compute_diffs, sort_by};
use crate::error::CompareResult;
use crate::user_interaction::{print_insight, print_table};

/// Everything one comparison run produces.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Join result before any derived columns, as the preview shows it.
    pub merged: Table,
    /// Merged rows with `_diff` columns, sorted on `sort_by`.
    pub sorted: Table,
    pub sort_by: String,
    pub positive: usize,
    pub signs: SignCounts,
    pub join: JoinReport,
}

pub fn compare_files(config: &Config) -> CompareResult<Comparison> {
    let delimiter = config.delimiter_byte()?;
    let required = RequiredColumns {
        key: &config.key_column,
        metrics: &config.metrics,
    };

    let baseline = load(&config.baseline_path, required, delimiter)?;
    let final_ = load(&config.final_path, required, delimiter)?;
    compare_tables(&baseline, &final_, config)
}

pub fn compare_tables(baseline: &Table, final_: &Table, config: &Config) -> CompareResult<Comparison> {
    let suffixes = (config.suffixes.0.as_str(), config.suffixes.1.as_str());

    let (merged, join) = inner_join(baseline, final_, &config.key_column, suffixes)?;
    if join.left_only > 0 || join.right_only > 0 {
        log::info!(
            "Dropped {} baseline-only and {} final-only {} value(s) in the join",
            join.left_only,
            join.right_only,
            config.key_column
        );
    }

    let mut with_diffs = merged.clone();
    compute_diffs(&mut with_diffs, &config.metrics, suffixes)?;

    let sorted = sort_by(&with_diffs, &config.sort_by, true)?;
    let positive = count_positive(&sorted, &config.sort_by)?;
    let signs = sign_counts(&sorted, &config.sort_by)?;
    log::info!(
        "{}: {} up, {} down, {} flat",
        config.sort_by,
        signs.positive,
        signs.negative,
        signs.zero
    );

    Ok(Comparison {
        merged,
        sorted,
        sort_by: config.sort_by.clone(),
        positive,
        signs,
        join,
    })
}

pub fn print_report(comparison: &Comparison, preview_rows: usize) {
    print_table(&comparison.merged.head(preview_rows), comparison.merged.len());
    print_insight(&format!("{}    {}", comparison.sort_by, comparison.positive));
}
