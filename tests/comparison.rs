use diffbro::config::Config;
use diffbro::csv_comparator::compare_files;
use diffbro::csv_manager::{load, RequiredColumns};
use diffbro::error::CompareError;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, text).unwrap();
    path
}

fn config_for(baseline: &Path, final_: &Path) -> Config {
    Config {
        baseline_path: baseline.to_path_buf(),
        final_path: final_.to_path_buf(),
        ..Config::default()
    }
}

#[test]
fn counts_regressions_across_files() {
    let dir = TempDir::new().unwrap();
    let baseline = write(
        &dir,
        "baseline.csv",
        "product,RMSE,MAE\nA,1.0,2.0\nB,2.0,1.0\nC,3.0,3.0\nD,4.0,4.0\n",
    );
    let final_ = write(
        &dir,
        "final.csv",
        "product,RMSE,MAE\nD,4.0,4.5\nB,1.0,1.25\nA,1.5,1.5\nE,9.0,9.0\n",
    );

    let result = compare_files(&config_for(&baseline, &final_)).unwrap();

    let products = result.sorted.texts("product").unwrap();
    assert_eq!(products, &["D", "B", "A"]);
    assert!(!products.iter().any(|p| p == "C" || p == "E"));

    let mae = result.sorted.numbers("MAE_diff").unwrap();
    assert!(mae.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(result.positive, 2);

    let rmse_final = result.sorted.numbers("RMSE_final").unwrap();
    let rmse_baseline = result.sorted.numbers("RMSE_baseline").unwrap();
    let rmse_diff = result.sorted.numbers("RMSE_diff").unwrap();
    for i in 0..rmse_diff.len() {
        assert_eq!(rmse_diff[i], rmse_final[i] - rmse_baseline[i]);
    }
}

fn workbook_fixture() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/metrics.xlsx")
}

#[test]
fn loads_first_sheet_of_a_workbook() {
    let metrics = vec!["RMSE".to_string(), "MAE".to_string()];
    let required = RequiredColumns {
        key: "product",
        metrics: &metrics,
    };

    let table = load(&workbook_fixture(), required, b',').unwrap();
    assert_eq!(table.headers(), &["product", "RMSE", "MAE"]);
    assert_eq!(table.texts("product").unwrap(), &["A", "B"]);
    assert_eq!(table.numbers("RMSE").unwrap(), &[1.0, 0.5]);
    assert_eq!(table.numbers("MAE").unwrap(), &[2.25, 1.0]);
}

#[test]
fn workbook_baseline_joins_against_csv_final() {
    let dir = TempDir::new().unwrap();
    let final_ = write(
        &dir,
        "final.csv",
        "product,RMSE,MAE\nB,0.75,1.5\nA,1.5,1.5\nZ,1.0,1.0\n",
    );

    let result = compare_files(&config_for(&workbook_fixture(), &final_)).unwrap();
    assert_eq!(result.merged.texts("product").unwrap(), &["A", "B"]);
    assert_eq!(result.sorted.texts("product").unwrap(), &["B", "A"]);
    assert_eq!(result.sorted.numbers("MAE_diff").unwrap(), &[0.5, -0.75]);
    assert_eq!(result.sorted.numbers("RMSE_diff").unwrap(), &[0.25, 0.5]);
    assert_eq!(result.positive, 1);
}

#[test]
fn empty_files_give_empty_result() {
    let dir = TempDir::new().unwrap();
    let baseline = write(&dir, "baseline.csv", "");
    let final_ = write(&dir, "final.csv", "");

    let result = compare_files(&config_for(&baseline, &final_)).unwrap();
    assert!(result.merged.is_empty());
    assert_eq!(result.positive, 0);
}

#[test]
fn missing_file_aborts() {
    let dir = TempDir::new().unwrap();
    let final_ = write(&dir, "final.csv", "product,RMSE,MAE\nA,1,1\n");

    let err = compare_files(&config_for(&dir.path().join("nope.csv"), &final_)).unwrap_err();
    assert!(matches!(err, CompareError::File { .. }));
}

#[test]
fn missing_column_aborts() {
    let dir = TempDir::new().unwrap();
    let baseline = write(&dir, "baseline.csv", "product,RMSE\nA,1\n");
    let final_ = write(&dir, "final.csv", "product,RMSE,MAE\nA,1,1\n");

    let err = compare_files(&config_for(&baseline, &final_)).unwrap_err();
    assert!(matches!(err, CompareError::Schema { .. }));
}

#[test]
fn binary_reads_default_paths_and_prints_count() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "Baseline/baseline_mean_accuracy.csv",
        "product,RMSE,MAE\nA,1.0,2.0\nB,1.0,1.0\n",
    );
    write(
        &dir,
        "Data_Inspection/predictions_errors_final.csv",
        "product,RMSE,MAE\nA,1.5,1.5\nB,1.0,3.0\n",
    );

    let output = Command::new(env!("CARGO_BIN_EXE_diffbro"))
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("|product |RMSE_baseline |MAE_baseline |RMSE_final |MAE_final |"));
    assert!(stdout.contains("Total rows: 2"));
    assert!(stdout.contains("MAE_diff    1"));
}

#[test]
fn binary_exits_non_zero_on_bad_input() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.csv", "product,RMSE,MAE\nA,x,1\n");
    write(&dir, "b.csv", "product,RMSE,MAE\nA,1,1\n");

    let output = Command::new(env!("CARGO_BIN_EXE_diffbro"))
        .current_dir(dir.path())
        .args(["a.csv", "b.csv"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("is not a number"));
}
