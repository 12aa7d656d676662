use anyhow::Context;
use verdant_core::{Reporter, RunSummary};

use crate::cli::args::CheckArgs;
use crate::exit_codes::{CHECKS_FAILED, SUCCESS};

pub fn run(args: CheckArgs) -> anyhow::Result<i32> {
    if !args.root.is_dir() {
        tracing::warn!(
            "project root {} is not a directory; every check will fail",
            args.root.display()
        );
    }

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    let summary = verdant_core::run(&args.root, &mut reporter).context("writing report to stdout")?;

    tracing::info!(
        sections = summary.sections,
        passed = summary.passed,
        failed = summary.failed,
        "check run finished"
    );
    Ok(exit_code(&summary, args.strict))
}

/// The report is advisory: failures only surface in the exit code under `--strict`.
pub fn exit_code(summary: &RunSummary, strict: bool) -> i32 {
    if strict && !summary.all_passed() {
        CHECKS_FAILED
    } else {
        SUCCESS
    }
}
