//! Data file loading: one JSON file per category, tolerant of absence.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{Category, PublishItem, Status};
use crate::log;

#[derive(Deserialize)]
struct PublishFile {
    #[serde(default)]
    publish: Vec<RawItem>,
}

/// On-disk record. Field names follow the data files; the category is not
/// among them; it comes from which file the record was read from.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    id: u64,
    depth1: String,
    depth2: String,
    depth3: String,
    #[serde(rename = "type")]
    kind: String,
    folder: String,
    file: String,
    status: Status,
    start_date: String,
    end_date: String,
    modified_date: String,
    dev_start_date: String,
    has_design: bool,
    #[serde(default)]
    history: Vec<String>,
}

impl RawItem {
    fn into_item(self, category: Category) -> PublishItem {
        PublishItem {
            id: self.id,
            category,
            depth1: self.depth1,
            depth2: self.depth2,
            depth3: self.depth3,
            kind: self.kind,
            folder: self.folder,
            file: self.file,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
            modified_date: self.modified_date,
            dev_start_date: self.dev_start_date,
            has_design: self.has_design,
            history: self.history,
        }
    }
}

/// Parse one category file's JSON text, tagging every record with the
/// category it came from.
pub fn parse_publish_file(
    text: &str,
    category: Category,
) -> Result<Vec<PublishItem>, serde_json::Error> {
    let file: PublishFile = serde_json::from_str(text)?;
    Ok(file
        .publish
        .into_iter()
        .map(|raw| raw.into_item(category))
        .collect())
}

/// Load every category file under `dir`. A missing or malformed file
/// contributes nothing; the board still comes up with whatever loaded.
pub(super) fn load_dir(dir: &Path) -> Vec<PublishItem> {
    let mut items = Vec::new();
    for category in Category::ALL {
        let path = dir.join(category.file_name());
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                log(&format!("store: read {} failed: {e}", path.display()));
                continue;
            }
        };
        match parse_publish_file(&text, category) {
            Ok(mut batch) => {
                log(&format!(
                    "store: {} items from {}",
                    batch.len(),
                    path.display()
                ));
                items.append(&mut batch);
            }
            Err(e) => log(&format!("store: parse {} failed: {e}", path.display())),
        }
    }
    items
}
