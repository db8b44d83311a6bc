use crate::chapter::document::Chapter;
use crate::foundation::error::{IrError, IrResult};
use crate::validate::diagnostic::ValidationReport;
use crate::validate::validator::ChapterValidator;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Options controlling multi-file validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchOpts {
    /// Validate files on a dedicated rayon pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// What happened to one input file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file decoded and was validated (the report may still contain defects).
    Checked(ValidationReport),
    /// The file could not be opened or decoded.
    LoadFailed(IrError),
}

/// Per-file batch result.
#[derive(Debug)]
pub struct FileReport {
    /// Input path as given.
    pub path: PathBuf,
    /// `chapterId` when the file decoded and carried a string id.
    pub chapter_id: Option<String>,
    /// Outcome.
    pub outcome: FileOutcome,
}

impl FileReport {
    /// Decoded and structurally valid.
    pub fn ok(&self) -> bool {
        matches!(&self.outcome, FileOutcome::Checked(r) if r.ok())
    }
}

/// Results for every input, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per input path.
    pub files: Vec<FileReport>,
}

impl BatchReport {
    /// Every file decoded and validated cleanly.
    pub fn all_ok(&self) -> bool {
        self.files.iter().all(FileReport::ok)
    }

    /// Files that decoded and validated cleanly.
    pub fn passed(&self) -> usize {
        self.files.iter().filter(|f| f.ok()).count()
    }

    /// Files that decoded but carry defects.
    pub fn failed(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(&f.outcome, FileOutcome::Checked(r) if !r.ok()))
            .count()
    }

    /// Files that could not be loaded.
    pub fn unreadable(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::LoadFailed(_)))
            .count()
    }
}

/// Load and validate each chapter file independently.
///
/// Load failures are recorded per file and never abort the batch. The only error returned is an
/// invalid configuration.
#[tracing::instrument(skip(paths, validator), fields(files = paths.len()))]
pub fn validate_paths(
    paths: &[PathBuf],
    validator: &ChapterValidator,
    opts: &BatchOpts,
) -> IrResult<BatchReport> {
    let files = if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        pool.install(|| {
            paths
                .par_iter()
                .map(|p| check_file(p, validator))
                .collect::<Vec<_>>()
        })
    } else {
        if opts.threads.is_some() {
            tracing::debug!("'threads' ignored without parallel mode");
        }
        paths.iter().map(|p| check_file(p, validator)).collect()
    };

    let report = BatchReport { files };
    tracing::info!(
        passed = report.passed(),
        failed = report.failed(),
        unreadable = report.unreadable(),
        "batch validated"
    );
    Ok(report)
}

fn check_file(path: &Path, validator: &ChapterValidator) -> FileReport {
    match Chapter::from_path(path) {
        Ok(chapter) => FileReport {
            path: path.to_path_buf(),
            chapter_id: chapter.chapter_id().map(str::to_owned),
            outcome: FileOutcome::Checked(chapter.validate(validator)),
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "chapter load failed");
            FileReport {
                path: path.to_path_buf(),
                chapter_id: None,
                outcome: FileOutcome::LoadFailed(e),
            }
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> IrResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(IrError::config("batch 'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| IrError::config(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/batch/runner.rs"]
mod tests;
