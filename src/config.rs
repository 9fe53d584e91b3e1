// config.rs
use crate::error::{CompareError, CompareResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "diffbro.config";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub baseline_path: PathBuf,
    pub final_path: PathBuf,
    pub key_column: String,
    pub metrics: Vec<String>,
    pub sort_by: String,
    pub preview_rows: usize,
    pub delimiter: String,
    pub suffixes: (String, String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            baseline_path: PathBuf::from("Baseline/baseline_mean_accuracy.csv"),
            final_path: PathBuf::from("Data_Inspection/predictions_errors_final.csv"),
            key_column: "product".to_string(),
            metrics: vec!["RMSE".to_string(), "MAE".to_string()],
            sort_by: "MAE_diff".to_string(),
            preview_rows: 5,
            delimiter: ",".to_string(),
            suffixes: ("_baseline".to_string(), "_final".to_string()),
        }
    }
}

impl Config {
    /// Reads `diffbro.config` from `dir` when it exists, defaults otherwise.
    pub fn load(dir: &Path) -> CompareResult<Config> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let text = fs::read_to_string(&config_path).map_err(|source| CompareError::File {
            path: config_path.clone(),
            source,
        })?;
        let config = Config::from_json(&text)?;
        log::debug!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn from_json(text: &str) -> CompareResult<Config> {
        let config: Config = serde_json::from_str(text)
            .map_err(|e| CompareError::Config(format!("that JSON won't parse: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Positional arguments win over whatever the config file says.
    pub fn with_args(mut self, args: &[String]) -> CompareResult<Config> {
        match args {
            [] => {}
            [baseline, final_] => {
                self.baseline_path = PathBuf::from(baseline);
                self.final_path = PathBuf::from(final_);
            }
            _ => {
                return Err(CompareError::Config(format!(
                    "expected <baseline> <final>, got {} argument(s)",
                    args.len()
                )))
            }
        }
        Ok(self)
    }

    pub fn delimiter_byte(&self) -> CompareResult<u8> {
        match self.delimiter.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(CompareError::Config(format!(
                "delimiter must be a single byte, got {:?}",
                self.delimiter
            ))),
        }
    }

    fn validate(&self) -> CompareResult<()> {
        self.delimiter_byte()?;
        if self.metrics.is_empty() {
            return Err(CompareError::Config("metrics can't be empty".to_string()));
        }
        if !self
            .metrics
            .iter()
            .any(|m| format!("{}_diff", m) == self.sort_by)
        {
            return Err(CompareError::Config(format!(
                "sort_by {:?} isn't the _diff of any metric in {:?}",
                self.sort_by, self.metrics
            )));
        }
        if self.suffixes.0 == self.suffixes.1 {
            return Err(CompareError::Config(
                "the two suffixes have to differ".to_string(),
            ));
        }
        Ok(())
    }
}
