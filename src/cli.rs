use crate::constants::DEFAULT_ROOT;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "img-sweep",
    about = "Re-encode oversized PNG/JPEG images in a directory tree as WebP",
    long_about = "img-sweep walks a directory tree, picks every .png/.jpg/.jpeg file larger than 200 KB, \
                  scales anything wider than 1920 px down to 1920 px (Lanczos), and writes a lossy WebP \
                  copy next to the original. Originals are never modified or deleted.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    img-sweep\n  \
    img-sweep ./site/static -q 75\n  \
    img-sweep ./assets --max-width 1280 --min-size 102400 --summary"
)]
pub struct Args {
    #[arg(
        default_value = DEFAULT_ROOT,
        help = "Root directory to scan",
        long_help = "Directory scanned recursively for candidate images. Defaults to ./public."
    )]
    pub root: PathBuf,

    #[arg(
        short = 'q',
        long,
        help = "WebP quality (0-100, default: 80)",
        long_help = "Lossy WebP quality from 0 (smallest) to 100 (near-lossless)."
    )]
    pub quality: Option<u8>,

    #[arg(
        short = 'w',
        long,
        help = "Maximum width in pixels (default: 1920)",
        long_help = "Images wider than this are scaled down to exactly this width, \
                     keeping the aspect ratio. Narrower images keep their size."
    )]
    pub max_width: Option<u32>,

    #[arg(
        long,
        help = "Size threshold in bytes (default: 204800)",
        long_help = "Only files strictly larger than this many bytes are converted."
    )]
    pub min_size: Option<u64>,

    #[arg(
        long,
        help = "Print a start banner and a final summary",
        long_help = "After the per-file lines, print totals for converted, failed and skipped \
                     files, bytes saved and elapsed time. Also enabled by --verbose."
    )]
    pub summary: bool,

    #[arg(
        long,
        conflicts_with_all = ["verbose", "summary"],
        help = "Suppress warnings; only print per-file results"
    )]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print skip and resize diagnostics")]
    pub verbose: bool,

    #[arg(long, help = "Show a progress spinner on stderr")]
    pub progress: bool,
}

impl Args {
    /// Banner and summary are opt-in so a plain run prints only outcome lines.
    pub fn wants_summary(&self) -> bool {
        self.summary || self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["img-sweep"]).unwrap();
        assert_eq!(args.root, PathBuf::from("./public"));
        assert_eq!(args.quality, None);
        assert_eq!(args.max_width, None);
        assert_eq!(args.min_size, None);
        assert!(!args.quiet && !args.verbose && !args.progress && !args.summary);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "img-sweep",
            "assets",
            "-q",
            "70",
            "--max-width",
            "1280",
            "--min-size",
            "1024",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(args.root, PathBuf::from("assets"));
        assert_eq!(args.quality, Some(70));
        assert_eq!(args.max_width, Some(1280));
        assert_eq!(args.min_size, Some(1024));
        assert!(args.verbose);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["img-sweep", "--quiet", "--verbose"]).is_err());
    }

    #[test]
    fn test_summary_flag() {
        let args = Args::try_parse_from(["img-sweep", "--summary"]).unwrap();
        assert!(args.summary);
        assert!(Args::try_parse_from(["img-sweep", "--quiet", "--summary"]).is_err());
    }

    #[test]
    fn test_wants_summary() {
        let args = Args::try_parse_from(["img-sweep"]).unwrap();
        assert!(!args.wants_summary());
        let args = Args::try_parse_from(["img-sweep", "-v"]).unwrap();
        assert!(args.wants_summary());
        let args = Args::try_parse_from(["img-sweep", "--summary"]).unwrap();
        assert!(args.wants_summary());
    }
}
