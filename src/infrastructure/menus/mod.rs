//! JSON-file menu store
//!
//! A MenuSource backed by a directory of per-restaurant JSON fixtures,
//! for development and testing. Each file carries the restaurant's name,
//! location and sectioned dish list; lookup flattens the sections the
//! same way the live data source would: drink sections are skipped and
//! duplicate dish names dropped.

pub mod classifier;

pub use classifier::VegetarianClassifier;

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::application::errors::MenuLookupError;
use crate::domain::entities::{Menu, MenuItem};
use crate::domain::traits::MenuSource;
use classifier::tidy_description;

/// Section names that never contain food
const SKIPPED_SECTIONS: &[&str] = &["Drinks", "Beverages"];

#[derive(Debug, Deserialize)]
struct MenuFile {
    restaurant: String,
    #[serde(default)]
    address: String,
    city: String,
    state: String,
    #[serde(default)]
    sections: Vec<SectionFile>,
}

#[derive(Debug, Deserialize)]
struct SectionFile {
    name: String,
    #[serde(default)]
    dishes: Vec<DishFile>,
}

#[derive(Debug, Deserialize)]
struct DishFile {
    name: String,
    #[serde(default)]
    description: String,
    /// Explicit override; when absent the classifier decides
    vegetarian: Option<bool>,
}

/// MenuSource reading JSON fixtures from a directory on every lookup
pub struct JsonMenuStore {
    directory: PathBuf,
    classifier: VegetarianClassifier,
}

impl JsonMenuStore {
    pub fn new(directory: impl Into<PathBuf>, classifier: VegetarianClassifier) -> Self {
        Self {
            directory: directory.into(),
            classifier,
        }
    }

    async fn load_files(&self) -> Result<Vec<MenuFile>, MenuLookupError> {
        let mut files = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.directory)
            .await
            .map_err(|e| MenuLookupError::Unavailable(e.to_string()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| MenuLookupError::Unavailable(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| MenuLookupError::Unavailable(e.to_string()))?;
            match serde_json::from_str::<MenuFile>(&content) {
                Ok(file) => files.push(file),
                Err(e) => {
                    tracing::warn!("Skipping malformed menu file {}: {}", path.display(), e);
                }
            }
        }

        Ok(files)
    }

    /// Flatten a menu file into the domain Menu, classifying each dish
    fn flatten(&self, file: &MenuFile) -> Menu {
        let mut menu = Menu::new(&file.restaurant).with_address(&file.address);
        let mut seen = HashSet::new();

        for section in &file.sections {
            if SKIPPED_SECTIONS
                .iter()
                .any(|skipped| section.name.contains(skipped))
            {
                continue;
            }
            for dish in &section.dishes {
                if !seen.insert(dish.name.clone()) {
                    continue;
                }
                let description = tidy_description(&dish.description);
                let is_vegetarian = dish
                    .vegetarian
                    .unwrap_or_else(|| self.classifier.is_vegetarian(&dish.name, &description));
                menu.push(MenuItem::new(&dish.name, is_vegetarian).with_description(description));
            }
        }

        menu
    }
}

fn matches(file: &MenuFile, name: &str, city: &str, state: &str) -> bool {
    file.restaurant.trim().eq_ignore_ascii_case(name.trim())
        && file.city.trim().eq_ignore_ascii_case(city.trim())
        && file.state.trim().eq_ignore_ascii_case(state.trim())
}

#[async_trait]
impl MenuSource for JsonMenuStore {
    async fn lookup(&self, name: &str, city: &str, state: &str) -> Result<Menu, MenuLookupError> {
        let files = self.load_files().await?;

        files
            .iter()
            .find(|file| matches(file, name, city, state))
            .map(|file| self.flatten(file))
            .ok_or_else(|| MenuLookupError::NotFound(name.to_string()))
    }
}
