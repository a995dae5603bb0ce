use serde::{Deserialize, Serialize};
use std::fs;
use tracing::{info, warn};

/// One known Pangyo-eo term with its plain-language definition.
/// Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub term: String,
    pub definition: String,
}

/// Loads the glossary from a JSON file.
///
/// The glossary only steers prompt quality, so a missing or malformed file
/// degrades to an empty list instead of failing startup.
pub fn load(path: &str) -> Vec<GlossaryEntry> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Could not read glossary file {}: {}", path, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<GlossaryEntry>>(&content) {
        Ok(entries) => {
            info!("Loaded {} glossary entries from {}", entries.len(), path);
            entries
        }
        Err(e) => {
            warn!("Could not parse glossary file {}: {}", path, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_empty_glossary() {
        let entries = load("definitely-not-here.json");
        assert!(entries.is_empty());
    }

    #[test]
    fn malformed_file_yields_empty_glossary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let entries = load(file.path().to_str().unwrap());
        assert!(entries.is_empty());
    }

    #[test]
    fn valid_file_preserves_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"term": "아삽", "definition": "최대한 빨리 (ASAP)"}},
                {{"term": "팔로업", "definition": "후속 조치"}}
            ]"#
        )
        .unwrap();
        let entries = load(file.path().to_str().unwrap());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].term, "아삽");
        assert_eq!(entries[1].definition, "후속 조치");
    }
}
