use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use halo_bundle::{discover_stylesheets, RealFileSystem};
use halo_compiler_html::ScopeRewriter;
use halo_linter::{lint_graph, Diagnostic, DiagnosticLevel, LintOptions};
use halo_resolver::resolve;
use halo_tokens::load_documents;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Config file (defaults to halo.config.json in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn lint(args: LintArgs, cwd: &Path, verbose: bool) -> Result<()> {
    let config = Config::load(cwd, args.config.as_deref())?;
    let json = match args.format.as_str() {
        "json" => true,
        "text" => false,
        other => return Err(anyhow::anyhow!("Unknown format: {}. Use: text or json", other)),
    };

    if !json {
        println!("🔍 {} Halo Linter", "Starting".green().bold());
        println!();
    }

    let documents = config.token_documents(cwd)?;
    let graph = load_documents(&documents)?;
    let resolved = resolve(&graph)?;

    let mut diagnostics = lint_graph(
        &resolved,
        LintOptions {
            roots: config.roots(),
            extra_roots: config.extra_roots.clone(),
            ..Default::default()
        },
    );
    diagnostics.extend(lint_stylesheets(&config, cwd)?);

    let errors = diagnostics
        .iter()
        .filter(|d| matches!(d.level, DiagnosticLevel::Error))
        .count();
    let warnings = diagnostics
        .iter()
        .filter(|d| matches!(d.level, DiagnosticLevel::Warning))
        .count();

    if json {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    } else {
        print_text(&diagnostics, verbose);

        println!(
            "✨ {} Linting complete!",
            if errors > 0 {
                "Done".red().bold()
            } else {
                "Done".green().bold()
            }
        );
        println!("   Tokens checked: {}", resolved.len());
        println!("   Total diagnostics: {}", diagnostics.len());

        if errors > 0 {
            println!("   {} {}", "Errors:".red(), errors);
        }
        if warnings > 0 {
            println!("   {} {}", "Warnings:".yellow(), warnings);
        }
        if errors == 0 && warnings == 0 {
            println!("   {} No issues found!", "✓".green());
        }
    }

    // Exit with error code if there are errors
    if errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Rewrite every stylesheet in memory and report selectors left unrewritten
fn lint_stylesheets(config: &Config, cwd: &Path) -> Result<Vec<Diagnostic>> {
    let rewriter = ScopeRewriter::new(config.class_prefix.clone())?;
    let stylesheets = discover_stylesheets(&RealFileSystem, &config.get_components_dir(cwd))?;
    let level = if config.strict {
        DiagnosticLevel::Error
    } else {
        DiagnosticLevel::Warning
    };

    let mut diagnostics = Vec::new();
    for stylesheet in &stylesheets {
        let output = rewriter.rewrite(&stylesheet.source, &stylesheet.name)?;
        for selector in output.residual {
            let mut diagnostic = Diagnostic::warning(
                "residual-shadow-syntax",
                format!("Selector '{}' has no class-scoped rewrite", selector),
                stylesheet.relative_path.display().to_string(),
            );
            diagnostic.level = level;
            diagnostics.push(diagnostic);
        }
    }
    Ok(diagnostics)
}

fn print_text(diagnostics: &[Diagnostic], verbose: bool) {
    for diagnostic in diagnostics {
        if !verbose && matches!(diagnostic.level, DiagnosticLevel::Info) {
            continue;
        }

        let level_str = match diagnostic.level {
            DiagnosticLevel::Error => "error".red().bold(),
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };

        println!(
            "  {} [{}] {}: {}",
            level_str,
            diagnostic.rule,
            diagnostic.path.bright_white(),
            diagnostic.message
        );

        if let Some(suggestion) = &diagnostic.suggestion {
            println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
        }
    }

    if !diagnostics.is_empty() {
        println!();
    }
}
