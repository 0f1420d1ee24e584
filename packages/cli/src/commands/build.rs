use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use halo_bundle::{prepare, RealFileSystem};
use halo_linter::DiagnosticLevel;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Config file (defaults to halo.config.json in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Fail on shadow-scope selectors the rewrite does not recognise
    #[arg(long)]
    pub strict: bool,

    /// Plan and verify without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

pub fn build(args: BuildArgs, cwd: &Path) -> Result<()> {
    let mut config = Config::load(cwd, args.config.as_deref())?;
    if let Some(out_dir) = args.out_dir {
        config.out_dir = out_dir;
    }
    if args.strict {
        config.strict = true;
    }

    println!("{}", "🔨 Building design tokens...".bright_blue().bold());

    let documents = config.token_documents(cwd)?;
    println!("Found {} token documents", documents.len());

    let components_dir = config.get_components_dir(cwd);
    let out_dir = config.get_out_dir(cwd);
    let options = config.build_options();

    let fs = RealFileSystem;
    let prepared = prepare(&fs, &documents, &components_dir, &options)?;
    let mut report = prepared.report;

    println!(
        "  {} {} tokens, themes: {}",
        "✓".green(),
        report.tokens,
        if report.layers.is_empty() {
            "none".to_string()
        } else {
            report.layers.join(", ")
        }
    );
    println!("  {} {} components", "✓".green(), report.components);

    let warnings = report
        .diagnostics
        .iter()
        .filter(|d| d.level != DiagnosticLevel::Info)
        .count();
    if warnings > 0 {
        println!(
            "  {} {} lint findings (run `halo lint` for details)",
            "⚠️".yellow(),
            warnings
        );
    }
    if report.residual > 0 {
        println!(
            "  {} {} selectors left unrewritten",
            "⚠️".yellow(),
            report.residual
        );
    }

    if args.dry_run {
        println!();
        println!(
            "{} Dry run: {} files planned for {}",
            "✅".green(),
            prepared.plan.files.len(),
            out_dir.display()
        );
        return Ok(());
    }

    report.written = prepared.plan.write(&fs, &out_dir)?;

    println!();
    println!(
        "{} Wrote {} files to {}",
        "✅".green(),
        report.written.len(),
        out_dir.display()
    );

    Ok(())
}
