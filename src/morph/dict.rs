use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use super::Lemmatizer;

/// Word → lemma table for Russian ingredient vocabulary, embedded at
/// compile time. Entries only cover inflected forms; a word missing from
/// the table resolves to itself, matching the guessing behavior of a full
/// morphological analyzer on words it does not know.
const EMBEDDED_TABLE: &str = include_str!("lemmas_ru.tsv");

/// Dictionary-backed lemmatizer.
#[derive(Debug, Clone)]
pub struct DictLemmatizer {
    lemmas: HashMap<String, String>,
}

impl Default for DictLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DictLemmatizer {
    /// Build from the embedded table.
    pub fn new() -> Self {
        let mut lemmatizer = DictLemmatizer {
            lemmas: HashMap::new(),
        };
        lemmatizer.load_entries(EMBEDDED_TABLE);
        lemmatizer
    }

    /// Build with no entries (every word resolves to itself).
    pub fn empty() -> Self {
        DictLemmatizer {
            lemmas: HashMap::new(),
        }
    }

    /// Merge entries from a user-supplied table file (`word<TAB>lemma` per
    /// line, `#` comments). Later entries win over the embedded ones.
    pub fn merge_file(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read lemma table {}", path.display()))?;
        Ok(self.load_entries(&content))
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    fn load_entries(&mut self, content: &str) -> usize {
        let mut loaded = 0;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((word, lemma)) = line.split_once('\t') {
                let word = word.trim().to_lowercase();
                let lemma = lemma.trim().to_lowercase();
                if !word.is_empty() && !lemma.is_empty() {
                    self.lemmas.insert(word, lemma);
                    loaded += 1;
                }
            }
        }
        loaded
    }
}

impl Lemmatizer for DictLemmatizer {
    fn lemmatize(&self, word: &str) -> Option<String> {
        let word = word.trim();
        if word.is_empty() {
            return None;
        }
        match self.lemmas.get(word) {
            Some(lemma) => Some(lemma.clone()),
            // Identity fallback for words outside the table.
            None => Some(word.to_string()),
        }
    }
}
