use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagesmith_sections::{SectionRegistry, SectionType};

#[derive(Debug, Args)]
pub struct SectionsArgs {
    /// Only show this section type (e.g. hero, pricing)
    pub section_type: Option<String>,
}

pub fn sections(args: SectionsArgs, _cwd: &str) -> Result<()> {
    let registry = SectionRegistry::builtin();

    let filter = args
        .section_type
        .as_deref()
        .map(str::parse::<SectionType>)
        .transpose()?;

    for definition in registry.all() {
        if filter.is_some_and(|t| t != definition.section_type) {
            continue;
        }

        println!(
            "{} {} {}",
            definition.icon,
            definition.name.bold(),
            format!("({})", definition.section_type).dimmed()
        );
        for variation in &definition.variations {
            println!(
                "    {} {}",
                variation.id.bright_white(),
                format!("- {}", variation.description).dimmed()
            );
        }
    }

    Ok(())
}
