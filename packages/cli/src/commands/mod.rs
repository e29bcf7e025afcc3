pub mod export;
pub mod init;
pub mod page;
pub mod sections;

pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use page::{
    add, clear, duplicate, list, move_section, remove, update, AddArgs, ListArgs, MoveArgs,
    SectionIdArgs, UpdateArgs,
};
pub use sections::{sections, SectionsArgs};

use crate::config::Config;
use anyhow::{anyhow, Result};
use pagesmith_editor::{ContentStore, FileStorage};
use pagesmith_sections::Content;

/// The saved page opened for one command
pub(crate) struct PageSession {
    storage: FileStorage,
    pub store: ContentStore,
}

impl PageSession {
    /// Open the saved page; an unusable payload is logged and the page starts empty
    pub fn open(config: &Config, cwd: &str) -> Result<Self> {
        let mut storage = FileStorage::new(config.get_storage_dir(cwd));
        let mut store = ContentStore::new("Landing Page");
        store.load_from(&mut storage)?;

        Ok(Self { storage, store })
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save_to(&mut self.storage)?;
        Ok(())
    }
}

/// Parse a `--content` argument; only JSON objects are accepted
pub(crate) fn parse_content(raw: &str) -> Result<Content> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| anyhow!("Invalid content JSON: {}", e))?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(anyhow!("Content must be a JSON object, got: {}", other)),
    }
}
