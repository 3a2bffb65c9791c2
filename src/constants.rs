pub const DEFAULT_ROOT: &str = "./public";

/// Files at or below this many bytes are left alone.
pub const DEFAULT_MIN_SIZE_BYTES: u64 = 200 * 1024;
pub const DEFAULT_MAX_WIDTH: u32 = 1920;

pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 0;
pub const MAX_QUALITY: u8 = 100;

/// Lowercased file-name suffixes that make a file a candidate.
pub const CANDIDATE_SUFFIXES: &[&str] = &[".png", ".jpg", ".jpeg"];
pub const OUTPUT_EXTENSION: &str = "webp";

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {msg}";

// Common output message prefixes
pub const SIZE_PREFIX: &str = "📊";
pub const SUCCESS_PREFIX: &str = "✅";
pub const WARNING_PREFIX: &str = "⚠️";
pub const INFO_PREFIX: &str = "📋";
