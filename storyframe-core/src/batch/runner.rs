use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::model::StoryConfig;
use crate::export::png::process_file;
use crate::foundation::error::{StoryError, StoryResult};

/// Threading controls for [`process_files`].
#[derive(Clone, Debug, Default)]
pub struct BatchThreading {
    /// Run sessions on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count (parallel mode only).
    pub threads: Option<usize>,
}

/// Result of one input file.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    /// Output path on success.
    pub result: StoryResult<PathBuf>,
}

/// Per-file outcomes, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn all_ok(&self) -> bool {
        self.failed() == 0
    }
}

/// Process every input as its own session.
///
/// A failing file does not stop the others. Only an invalid config or a thread-pool failure
/// fails the whole batch.
pub fn process_files(
    config: &StoryConfig,
    inputs: &[PathBuf],
    threading: &BatchThreading,
) -> StoryResult<BatchReport> {
    config.validate()?;

    let run = |input: &PathBuf| FileOutcome {
        input: input.clone(),
        result: run_one(config, input),
    };

    let outcomes = if threading.parallel && inputs.len() > 1 {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| inputs.par_iter().map(run).collect())
    } else {
        inputs.iter().map(run).collect()
    };

    let report = BatchReport { outcomes };
    tracing::info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "batch finished"
    );
    Ok(report)
}

fn run_one(config: &StoryConfig, input: &Path) -> StoryResult<PathBuf> {
    let result = process_file(config, input);
    if let Err(e) = &result {
        tracing::warn!(input = %input.display(), error = %e, "session aborted");
    }
    result
}

fn build_thread_pool(threads: Option<usize>) -> StoryResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| StoryError::invalid_config(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/batch/runner.rs"]
mod tests;
