use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

const EXAMPLE_TOKENS: &str = r##"{
  "base": {
    "color": {
      "type": "color",
      "white": { "value": "#ffffff" },
      "ink": { "value": "#1f2328" }
    },
    "spacing": {
      "type": "dimension",
      "sm": { "value": "4px" },
      "md": { "value": "8px" }
    },
    "duration": {
      "type": "duration",
      "fast": { "value": "120ms" }
    }
  },
  "semantic": {
    "background": {
      "primary": { "value": "{base.color.white}", "type": "color", "description": "Page background" }
    },
    "text": {
      "primary": { "value": "{base.color.ink}", "type": "color", "description": "Body text" }
    }
  },
  "theme": {
    "light": {
      "background": { "primary": { "value": "{base.color.white}" } },
      "text": { "primary": { "value": "{base.color.ink}" } }
    },
    "dark": {
      "background": { "primary": { "value": "#111111" } },
      "text": { "primary": { "value": "#f0f0f0" } }
    }
  }
}
"##;

const EXAMPLE_STYLESHEET: &str = r#":host {
  display: inline-flex;
  padding: var(--base-spacing-sm) var(--base-spacing-md);
  color: var(--text-primary);
  background: var(--background-primary);
  transition: opacity var(--base-duration-fast);
}

:host([disabled]) {
  opacity: 0.5;
}

button {
  all: unset;
  cursor: pointer;
}
"#;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Halo project...".bright_blue().bold());

    let config = Config::default();

    let tokens_dir = cwd.join("tokens");
    let example_tokens = tokens_dir.join("core.json");
    if !example_tokens.exists() {
        fs::create_dir_all(&tokens_dir)?;
        fs::write(&example_tokens, EXAMPLE_TOKENS)?;
        println!("  {} Created tokens/core.json", "✓".green());
    }

    let components_dir = config.get_components_dir(cwd).join("actions");
    let example_stylesheet = components_dir.join("button.css");
    if !example_stylesheet.exists() {
        fs::create_dir_all(&components_dir)?;
        fs::write(&example_stylesheet, EXAMPLE_STYLESHEET)?;
        println!("  {} Created {}/actions/button.css", "✓".green(), config.components);
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json + "\n")?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit tokens/core.json");
    println!("  2. Run: halo build");
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}
