use anyhow::{Context, Result};
use clap::Parser;
use img_sweep::cli::Args;
use img_sweep::logger::{set_quiet_mode, set_verbose_mode};
use img_sweep::{run_sweep, OptimizerConfig, WebpCodec};

fn main() -> Result<()> {
    let args = Args::parse();

    set_quiet_mode(args.quiet);
    set_verbose_mode(args.verbose);
    let show_summary = args.wants_summary();

    let config =
        OptimizerConfig::from_overrides(args.root, args.quality, args.max_width, args.min_size)
            .context("invalid configuration")?;

    if show_summary {
        img_sweep::info!("🚀 Starting image sweep...");
        img_sweep::info!("📁 Root: {:?}", config.root);
    }

    let report = run_sweep(&config, &WebpCodec::default(), args.progress)
        .with_context(|| format!("failed to walk {:?}", config.root))?;

    // Per-file failures were already reported; they do not affect the exit code.
    if show_summary {
        report.print_summary();
    }

    Ok(())
}
