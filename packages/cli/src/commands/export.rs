use super::PageSession;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagesmith_compiler_html::{compile_page, export_file_name};
use std::fs;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Page title (overrides config)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Leave out the inline stylesheet
    #[arg(long)]
    pub no_styles: bool,

    /// Leave out meta tags
    #[arg(long)]
    pub no_meta: bool,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let mut config = Config::load(cwd)?;
    if let Some(out_dir) = args.out_dir {
        config.out_dir = out_dir;
    }

    let mut options = config.export.clone();
    if let Some(title) = args.title {
        options.title = title;
    }
    if args.no_styles {
        options.include_styles = false;
    }
    if args.no_meta {
        options.include_meta = false;
    }

    let session = PageSession::open(&config, cwd)?;
    let html = compile_page(session.store.sections(), &options);

    if args.stdout {
        println!("{}", html);
        return Ok(());
    }

    let out_dir = config.get_out_dir(cwd);
    fs::create_dir_all(&out_dir)?;
    let output_path = out_dir.join(export_file_name(&options));
    fs::write(&output_path, &html)?;

    println!(
        "{} Exported {} sections → {}",
        "✅".green(),
        session.store.sections().len(),
        output_path.display()
    );

    Ok(())
}
