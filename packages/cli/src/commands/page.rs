//! Commands that read or edit the saved page
//!
//! Each mutating command opens the saved page, applies exactly one edit and
//! writes the result back.

use super::{parse_content, PageSession};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagesmith_editor::{NewSection, SectionPatch};
use pagesmith_sections::{SectionRegistry, SectionType};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the sections as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Section type (header, hero, features, ...)
    pub section_type: String,

    /// Variation id (see `pagesmith sections`)
    pub variation: String,

    /// Initial content as a JSON object
    #[arg(short, long)]
    pub content: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Section id
    pub id: String,

    /// Replacement content as a JSON object
    #[arg(short, long)]
    pub content: String,
}

#[derive(Debug, Args)]
pub struct SectionIdArgs {
    /// Section id
    pub id: String,
}

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Section id
    pub id: String,

    /// Target position (clamped to the last slot)
    pub index: usize,
}

pub fn list(args: ListArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let session = PageSession::open(&config, cwd)?;
    let sections = session.store.sections();

    if args.json {
        println!("{}", serde_json::to_string_pretty(sections)?);
        return Ok(());
    }

    if sections.is_empty() {
        println!("{}", "No sections yet. Add one with `pagesmith add`.".dimmed());
        return Ok(());
    }

    for section in sections {
        println!(
            "  {:>2}  {}  {} {}",
            section.order,
            section.id.bright_white(),
            section.section_type.to_string().bold(),
            format!("({})", section.variation_id).dimmed()
        );
    }

    Ok(())
}

pub fn add(args: AddArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let section_type: SectionType = args.section_type.parse()?;
    SectionRegistry::builtin().require_variation(section_type, &args.variation)?;

    let mut section = NewSection::new(section_type, args.variation);
    if let Some(raw) = &args.content {
        section = section.with_content(parse_content(raw)?);
    }

    let mut session = PageSession::open(&config, cwd)?;
    let id = session.store.add_section(section)?;
    session.save()?;

    println!("{} Added {} section {}", "✓".green(), section_type, id.bright_white());
    Ok(())
}

pub fn update(args: UpdateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let content = parse_content(&args.content)?;

    let mut session = PageSession::open(&config, cwd)?;
    session.store.update_section(&args.id, SectionPatch::content(content))?;
    session.save()?;

    println!("{} Updated {}", "✓".green(), args.id.bright_white());
    Ok(())
}

pub fn remove(args: SectionIdArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let mut session = PageSession::open(&config, cwd)?;
    session.store.delete_section(&args.id)?;
    session.save()?;

    println!("{} Removed {}", "✓".green(), args.id.bright_white());
    Ok(())
}

pub fn duplicate(args: SectionIdArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let mut session = PageSession::open(&config, cwd)?;
    let copy = session.store.duplicate_section(&args.id)?;
    session.save()?;

    println!(
        "{} Duplicated {} → {}",
        "✓".green(),
        args.id,
        copy.bright_white()
    );
    Ok(())
}

pub fn move_section(args: MoveArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let mut session = PageSession::open(&config, cwd)?;
    session.store.move_section(&args.id, args.index)?;
    session.save()?;

    let position = session
        .store
        .section(&args.id)
        .map(|s| s.order)
        .unwrap_or(args.index);
    println!("{} Moved {} to position {}", "✓".green(), args.id.bright_white(), position);
    Ok(())
}

pub fn clear(cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let mut session = PageSession::open(&config, cwd)?;
    let removed = session.store.sections().len();
    session.store.clear_sections()?;
    session.save()?;

    println!("{} Removed {} sections", "✓".green(), removed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_editor::{load_page, FileStorage};

    fn saved_sections(cwd: &str) -> Vec<(SectionType, String)> {
        let config = Config::load(cwd).unwrap();
        let mut storage = FileStorage::new(config.get_storage_dir(cwd));
        load_page(&mut storage)
            .map(|saved| {
                saved
                    .sections
                    .into_iter()
                    .map(|s| (s.section_type, s.id))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn add_section(cwd: &str, section_type: &str, variation: &str) {
        add(
            AddArgs {
                section_type: section_type.to_string(),
                variation: variation.to_string(),
                content: None,
            },
            cwd,
        )
        .unwrap();
    }

    #[test]
    fn test_add_persists_sections_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        add_section(cwd, "hero", "hero-centered");
        add_section(cwd, "footer", "footer-simple");

        let saved = saved_sections(cwd);
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].0, SectionType::Hero);
        assert_eq!(saved[1].0, SectionType::Footer);
        assert_ne!(saved[0].1, saved[1].1);
    }

    #[test]
    fn test_add_rejects_unknown_variation() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        let result = add(
            AddArgs {
                section_type: "hero".to_string(),
                variation: "hero-carousel".to_string(),
                content: None,
            },
            cwd,
        );
        assert!(result.is_err());
        assert!(saved_sections(cwd).is_empty());
    }

    #[test]
    fn test_update_missing_section_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        add_section(cwd, "hero", "hero-centered");

        let result = update(
            UpdateArgs {
                id: "missing".to_string(),
                content: r#"{ "title": "Hi" }"#.to_string(),
            },
            cwd,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_commands_recover_from_duplicate_id_payload() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        let storage_dir = Config::load(cwd).unwrap().get_storage_dir(cwd);
        std::fs::create_dir_all(&storage_dir).unwrap();
        std::fs::write(
            storage_dir.join("pagesmith-page.json"),
            r#"{
                "sections": [
                    { "id": "a", "type": "hero", "variationId": "hero-centered", "content": {}, "order": 0 },
                    { "id": "a", "type": "footer", "variationId": "footer-simple", "content": {}, "order": 1 }
                ],
                "savedAt": "2024-05-01T12:00:00Z"
            }"#,
        )
        .unwrap();

        list(ListArgs { json: false }, cwd).unwrap();
        clear(cwd).unwrap();
        assert!(saved_sections(cwd).is_empty());

        add_section(cwd, "hero", "hero-centered");
        assert_eq!(saved_sections(cwd).len(), 1);
    }

    #[test]
    fn test_move_duplicate_remove_clear() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        add_section(cwd, "header", "header-simple");
        add_section(cwd, "hero", "hero-centered");

        let hero = saved_sections(cwd)[1].1.clone();
        move_section(MoveArgs { id: hero.clone(), index: 0 }, cwd).unwrap();
        assert_eq!(saved_sections(cwd)[0].1, hero);

        duplicate(SectionIdArgs { id: hero.clone() }, cwd).unwrap();
        let saved = saved_sections(cwd);
        assert_eq!(saved.len(), 3);
        assert_eq!(saved[2].0, SectionType::Hero);
        assert_ne!(saved[2].1, hero);

        remove(SectionIdArgs { id: hero.clone() }, cwd).unwrap();
        assert_eq!(saved_sections(cwd).len(), 2);

        clear(cwd).unwrap();
        assert!(saved_sections(cwd).is_empty());
    }
}
