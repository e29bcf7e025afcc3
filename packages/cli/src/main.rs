mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add, clear, duplicate, export, init, list, move_section, remove, sections, update, AddArgs,
    ExportArgs, InitArgs, ListArgs, MoveArgs, SectionIdArgs, SectionsArgs, UpdateArgs,
};
use tracing_subscriber::EnvFilter;

/// Pagesmith CLI - Build landing pages from ready-made sections
#[derive(Parser, Debug)]
#[command(name = "pagesmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Pagesmith project
    Init(InitArgs),

    /// List available section types and variations
    Sections(SectionsArgs),

    /// Show the sections of the saved page
    List(ListArgs),

    /// Append a section to the page
    Add(AddArgs),

    /// Replace a section's content
    Update(UpdateArgs),

    /// Delete a section
    Remove(SectionIdArgs),

    /// Copy a section to the end of the page
    Duplicate(SectionIdArgs),

    /// Move a section to a new position
    Move(MoveArgs),

    /// Remove every section
    Clear,

    /// Export the page as a static HTML file
    Export(ExportArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Command) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();

    match command {
        Command::Init(args) => init(args, &cwd),
        Command::Sections(args) => sections(args, &cwd),
        Command::List(args) => list(args, &cwd),
        Command::Add(args) => add(args, &cwd),
        Command::Update(args) => update(args, &cwd),
        Command::Remove(args) => remove(args, &cwd),
        Command::Duplicate(args) => duplicate(args, &cwd),
        Command::Move(args) => move_section(args, &cwd),
        Command::Clear => clear(&cwd),
        Command::Export(args) => export(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
