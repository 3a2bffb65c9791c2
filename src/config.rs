use crate::constants::{
    DEFAULT_MAX_WIDTH, DEFAULT_MIN_SIZE_BYTES, DEFAULT_QUALITY, DEFAULT_ROOT, MAX_QUALITY,
    MIN_QUALITY,
};
use crate::error::{CompressionError, Result};
use std::path::{Path, PathBuf};

/// Everything the sweep needs to know, passed explicitly into
/// [`crate::batch::optimize_tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerConfig {
    /// Directory to scan recursively.
    pub root: PathBuf,
    /// Files whose size is `<=` this many bytes are skipped.
    pub min_size_bytes: u64,
    /// Images wider than this are scaled down to exactly this width.
    pub max_width: u32,
    /// Lossy WebP quality, 0-100.
    pub quality: u8,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

impl OptimizerConfig {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            min_size_bytes: DEFAULT_MIN_SIZE_BYTES,
            max_width: DEFAULT_MAX_WIDTH,
            quality: DEFAULT_QUALITY,
        }
    }

    pub fn with_min_size(mut self, min_size_bytes: u64) -> Self {
        self.min_size_bytes = min_size_bytes;
        self
    }

    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Builds a config from optional overrides, falling back to the defaults
    /// for anything left unset, and validates the result.
    pub fn from_overrides(
        root: PathBuf,
        quality: Option<u8>,
        max_width: Option<u32>,
        min_size_bytes: Option<u64>,
    ) -> Result<Self> {
        let config = Self {
            root,
            min_size_bytes: min_size_bytes.unwrap_or(DEFAULT_MIN_SIZE_BYTES),
            max_width: max_width.unwrap_or(DEFAULT_MAX_WIDTH),
            quality: quality.unwrap_or(DEFAULT_QUALITY),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&self.quality) {
            return Err(CompressionError::InvalidQuality(self.quality));
        }
        if self.max_width == 0 {
            return Err(CompressionError::InvalidMaxWidth(self.max_width));
        }
        Ok(())
    }
}
