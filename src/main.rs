use diffbro::config::Config;
use diffbro::csv_comparator::{compare_files, print_report};
use diffbro::error::CompareResult;
use diffbro::user_interaction::{print_insight, print_insight_level_2};
use std::env;
use std::path::Path;
use std::process;

const BRO_VERSION: &str = env!("CARGO_PKG_VERSION");

fn run(args: &[String]) -> CompareResult<()> {
    let config = Config::load(Path::new("."))?.with_args(args)?;
    log::debug!("Running with {:?}", config);

    let comparison = compare_files(&config)?;
    print_report(&comparison, config.preview_rows);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if env::args().any(|arg| arg == "--version") {
        print_insight(BRO_VERSION);
        process::exit(0);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        print_insight("Whoa, hit a snag, bro.");
        print_insight_level_2(&e.to_string());
        process::exit(1);
    }
}
