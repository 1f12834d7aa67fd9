//! Runs the reference comparison and prints the results table.
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`
//! (e.g. `RUST_LOG=u_greedy=debug`).

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use u_greedy::trials::{TrialConfig, TrialRunner};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = TrialConfig::default();

    println!("Running simulations...");
    match TrialRunner::run(&config) {
        Ok(report) => {
            print!("{report}");
            println!();
            for &dimension in &config.dimensions {
                if let Some(best) = report.best_for(dimension) {
                    println!(
                        "n = {dimension}: best mean cost {:.4} ({})",
                        best.mean_cost, best.algorithm
                    );
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "experiment failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
