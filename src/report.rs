use crate::constants::{INFO_PREFIX, SIZE_PREFIX, SUCCESS_PREFIX, WARNING_PREFIX};
use crate::error::CompressionError;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// What happened to one candidate file.
#[derive(Debug)]
pub enum FileOutcome {
    Converted {
        source: PathBuf,
        output: PathBuf,
        original_size: u64,
        output_size: u64,
        original_dimensions: (u32, u32),
        output_dimensions: (u32, u32),
    },
    Failed {
        source: PathBuf,
        error: CompressionError,
    },
}

impl FileOutcome {
    pub fn source(&self) -> &Path {
        match self {
            FileOutcome::Converted { source, .. } | FileOutcome::Failed { source, .. } => source,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Converted { .. })
    }

    /// The single console line printed for this file.
    pub fn console_line(&self) -> String {
        match self {
            FileOutcome::Converted { source, output, .. } => {
                format!("Converted: {} -> {}", file_name(source), file_name(output))
            }
            FileOutcome::Failed { source, error } => {
                format!("Failed to convert {}: {}", file_name(source), error)
            }
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Aggregated result of one sweep.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
    /// Candidates left alone because they were under the size threshold.
    pub skipped_small: usize,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn converted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.converted_count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn total_original_bytes(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|o| match o {
                FileOutcome::Converted { original_size, .. } => *original_size,
                FileOutcome::Failed { .. } => 0,
            })
            .sum()
    }

    pub fn total_output_bytes(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|o| match o {
                FileOutcome::Converted { output_size, .. } => *output_size,
                FileOutcome::Failed { .. } => 0,
            })
            .sum()
    }

    /// Percentage saved across converted files; negative if outputs grew.
    pub fn savings_ratio(&self) -> f64 {
        calculate_compression_ratio(self.total_original_bytes(), self.total_output_bytes())
    }

    pub fn print_summary(&self) {
        crate::info!("\n{} Sweep Summary:", SIZE_PREFIX);
        crate::info!("  {} Converted: {}", SUCCESS_PREFIX, self.converted_count());
        crate::info!("  {} Skipped (below threshold): {}", INFO_PREFIX, self.skipped_small);
        crate::info!(
            "  {} Total original size: {}",
            SIZE_PREFIX,
            format_file_size(self.total_original_bytes())
        );
        crate::info!(
            "  {} Total WebP size: {}",
            SIZE_PREFIX,
            format_file_size(self.total_output_bytes())
        );
        crate::info!("  🎯 Overall savings: {:.1}%", self.savings_ratio());
        crate::info!("  ⏱️  Total time: {:?}", self.elapsed);

        let failed = self.failed_count();
        if failed > 0 {
            crate::info!("  {}  Failed files: {}", WARNING_PREFIX, failed);
        }
    }
}

/// Human-readable size, e.g. "1.2 MB".
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

pub fn calculate_compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0
}
