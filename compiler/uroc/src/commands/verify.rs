//! The `verify` command: run every stage on its real toolchain.

use uro_compose::ComposeConfig;

use super::compose_or_exit;
use crate::verify::{StepRunner, VerifyConfig, VerifySummary};

/// Compose the selected relay, verify it, print results and exit with the
/// summary's status.
pub fn verify_relay(langs: Option<&str>, config: &VerifyConfig, verbose: bool) {
    let (_, relay) = compose_or_exit(langs, ComposeConfig::default());
    let runner = StepRunner::new(config.clone());
    if runner.selected(&relay).is_empty() {
        eprintln!("No stages match the filter.");
        std::process::exit(1);
    }

    let summary = runner.run(&relay);
    print_summary(&summary, verbose);
    std::process::exit(summary.exit_code());
}

fn print_summary(summary: &VerifySummary, verbose: bool) {
    for outcome in &summary.outcomes {
        match &outcome.result {
            Ok(elapsed) => {
                if verbose {
                    println!(
                        "  ok    {:>2} {} ({:.2}s)",
                        outcome.index,
                        outcome.language,
                        elapsed.as_secs_f64()
                    );
                }
            }
            Err(err) => {
                println!("  FAIL  {:>2} {}", outcome.index, outcome.language);
                eprintln!("{}", err.report());
            }
        }
    }

    println!();
    println!(
        "{} passed, {} failed ({:.2}s)",
        summary.passed(),
        summary.failed(),
        summary.elapsed.as_secs_f64()
    );
}
