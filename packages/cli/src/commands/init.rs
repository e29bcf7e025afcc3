use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Page title used for export
    #[arg(short, long)]
    pub title: Option<String>,

    /// Directory the saved page is kept in
    #[arg(short, long, default_value = ".pagesmith")]
    pub storage_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

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

    println!("{}", "📝 Initializing Pagesmith project...".bright_blue().bold());

    let mut config = Config {
        storage_dir: args.storage_dir.clone(),
        ..Config::default()
    };
    if let Some(title) = args.title {
        config.export.title = title;
    }

    let storage_dir = config.get_storage_dir(cwd);
    if !storage_dir.exists() {
        fs::create_dir_all(&storage_dir)?;
        println!("  {} Created {}/", "✓".green(), args.storage_dir);
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: pagesmith sections");
    println!("  2. Run: pagesmith add hero hero-centered");
    println!("  3. Run: pagesmith export");

    Ok(())
}
