use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("category table is empty")]
    EmptyTable,

    #[error("category {0:?} has an empty word list")]
    EmptyCategory(String),

    #[error("duplicate category name: {0:?}")]
    DuplicateCategory(String),

    #[error("failed to parse category config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry of the JSON category config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub words: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    words: Vec<String>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Validated, immutable category table.
///
/// Categories are addressed by index, so every lookup after construction is
/// total. Validation rejects empty tables, empty word lists and duplicate
/// names up front, which keeps the draw path free of error handling.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    pub fn new(configs: Vec<CategoryConfig>) -> Result<Self, TableError> {
        if configs.is_empty() {
            return Err(TableError::EmptyTable);
        }

        let mut seen = HashSet::with_capacity(configs.len());
        let mut categories = Vec::with_capacity(configs.len());

        for config in configs {
            if config.words.is_empty() {
                return Err(TableError::EmptyCategory(config.name));
            }

            if !seen.insert(config.name.clone()) {
                return Err(TableError::DuplicateCategory(config.name));
            }

            categories.push(Category {
                name: config.name,
                words: config.words,
            });
        }

        Ok(Self { categories })
    }

    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let configs: Vec<CategoryConfig> = serde_json::from_str(json)?;

        Self::new(configs)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, index: usize) -> &Category {
        &self.categories[index]
    }

    pub fn names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Built-in table used when no config file is given.
    pub fn demo() -> Self {
        let entry = |name: &str, words: &[&str]| CategoryConfig {
            name: name.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
        };

        let configs = vec![
            entry(
                "Animals",
                &["otter", "falcon", "gecko", "badger", "lynx", "heron", "mole", "wren"],
            ),
            entry(
                "Foods",
                &["noodles", "mango", "pretzel", "olive", "waffle", "radish", "brie"],
            ),
            entry(
                "Places",
                &["harbor", "canyon", "atrium", "glacier", "bazaar", "orchard"],
            ),
            entry(
                "Sports",
                &["curling", "fencing", "rowing", "squash", "archery", "judo"],
            ),
        ];

        Self::new(configs).expect("demo table is valid")
    }
}
