//! Lazy-loaded, process-lifetime-cached `word -> definition` lookup.
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

pub struct Definitions {
    path: PathBuf,
    cache: OnceLock<HashMap<String, String>>,
}

impl Definitions {
    pub fn new(data_dir: &Path) -> Self {
        Self { path: data_dir.join("definitions.json"), cache: OnceLock::new() }
    }

    pub fn lookup(&self, word: &str) -> Option<String> {
        self.cache.get_or_init(|| self.load()).get(word).cloned()
    }

    fn load(&self) -> HashMap<String, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => map,
                Err(e) => {
                    log::warn!("malformed definitions file {}: {e}", self.path.display());
                    HashMap::new()
                }
            },
            Err(_) => {
                log::warn!("no definitions file at {}", self.path.display());
                HashMap::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_and_caches_definitions() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("definitions.json"), r#"{"cat":"a small feline"}"#).unwrap();
        let defs = Definitions::new(dir.path());
        assert_eq!(defs.lookup("cat"), Some("a small feline".to_string()));
        assert_eq!(defs.lookup("dog"), None);
    }

    #[test]
    fn missing_file_yields_no_definitions() {
        let dir = tempfile::tempdir().unwrap();
        let defs = Definitions::new(dir.path());
        assert_eq!(defs.lookup("cat"), None);
    }
}
