use crate::codec::ImageCodec;
use crate::config::OptimizerConfig;
use crate::constants::{CANDIDATE_SUFFIXES, PROGRESS_SPINNER_TEMPLATE};
use crate::error::Result;
use crate::processing::optimize_file;
use crate::report::{BatchReport, FileOutcome};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use std::time::Instant;
use walkdir::WalkDir;

/// Whether the file name marks `path` as a PNG/JPEG candidate.
/// Matches on the lowercased name, so `.JPG` counts and `photo.jpg.bak` does not.
pub fn is_candidate_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy().to_lowercase();
            CANDIDATE_SUFFIXES
                .iter()
                .any(|suffix| name.ends_with(suffix))
        })
        .unwrap_or(false)
}

/// Strictly greater than the threshold; a file of exactly `min_size_bytes` is skipped.
pub fn exceeds_threshold(size: u64, config: &OptimizerConfig) -> bool {
    size > config.min_size_bytes
}

/// Walks `config.root` and converts every oversized candidate, one file at a
/// time. `on_outcome` sees each result as soon as it is produced.
///
/// Per-file failures end up in the report; only traversal errors are
/// returned as `Err`.
pub fn optimize_tree<C, F>(
    config: &OptimizerConfig,
    codec: &C,
    mut on_outcome: F,
) -> Result<BatchReport>
where
    C: ImageCodec,
    F: FnMut(&FileOutcome),
{
    let start_time = Instant::now();
    let mut report = BatchReport::default();

    for entry in WalkDir::new(&config.root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if !is_candidate_file(path) {
            continue;
        }

        // Follows symlinks, so a linked image is sized by its target.
        let size = match fs::metadata(path) {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                let outcome = FileOutcome::Failed {
                    source: path.to_path_buf(),
                    error: e.into(),
                };
                on_outcome(&outcome);
                report.outcomes.push(outcome);
                continue;
            }
        };

        if !exceeds_threshold(size, config) {
            crate::verbose!("Skipping {:?} ({} bytes)", path, size);
            report.skipped_small += 1;
            continue;
        }

        let outcome = optimize_file(codec, path, size, config);
        on_outcome(&outcome);
        report.outcomes.push(outcome);
    }

    report.elapsed = start_time.elapsed();
    Ok(report)
}

/// [`optimize_tree`] with the console reporting the CLI uses: exactly one
/// line per candidate on stdout, plus an optional spinner on stderr.
pub fn run_sweep<C: ImageCodec>(
    config: &OptimizerConfig,
    codec: &C,
    show_progress: bool,
) -> Result<BatchReport> {
    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template(PROGRESS_SPINNER_TEMPLATE) {
            pb.set_style(style);
        }
        pb.set_message("Scanning...");
        pb
    } else {
        ProgressBar::hidden()
    };

    let result = optimize_tree(config, codec, |outcome| {
        spinner.suspend(|| println!("{}", outcome.console_line()));
        spinner.set_message(format!("Last: {}", outcome.source().display()));
        spinner.tick();
    });

    spinner.finish_and_clear();
    result
}
