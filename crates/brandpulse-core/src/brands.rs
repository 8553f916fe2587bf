use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One brand entry as written in `brands.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub handles: Vec<String>,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    #[serde(default)]
    pub negative_keywords: Vec<String>,
    /// The name is an ordinary word and needs corroborating context.
    #[serde(default)]
    pub nonspecific: bool,
    /// The name is itself a food adjective ("Vanilla Bean").
    #[serde(default)]
    pub food_related: bool,
}

#[derive(Debug, Deserialize)]
pub struct BrandsFile {
    pub brands: Vec<BrandConfig>,
}

/// A normalised brand record. Handles, alternate names and negative keywords
/// are lowercase, trimmed and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    pub id: String,
    pub display_name: String,
    pub handles: Vec<String>,
    pub alternate_names: Vec<String>,
    pub negative_keywords: Vec<String>,
    pub is_nonspecific: bool,
    pub is_food_related: bool,
}

impl Brand {
    /// Lowercase display name, the form used for all text matching.
    #[must_use]
    pub fn lowercase_name(&self) -> String {
        self.display_name.to_lowercase()
    }

    /// Lowercase display name with spaces replaced by underscores.
    ///
    /// Keys the brand-scoped output directory and the provenance fallback
    /// (`"Maple Hill"` → `"maple_hill"`).
    #[must_use]
    pub fn snake_name(&self) -> String {
        self.lowercase_name().replace(' ', "_")
    }

    /// Handles ∪ {lowercase name} ∪ alternate names, in that order.
    #[must_use]
    pub fn company_keywords(&self) -> Vec<String> {
        let mut keywords = Vec::with_capacity(self.handles.len() + self.alternate_names.len() + 1);
        keywords.extend(self.handles.iter().cloned());
        keywords.push(self.lowercase_name());
        keywords.extend(self.alternate_names.iter().cloned());
        keywords
    }
}

impl From<BrandConfig> for Brand {
    fn from(config: BrandConfig) -> Self {
        Self {
            id: config.id.trim().to_string(),
            display_name: config.name.trim().to_string(),
            handles: normalize_terms(config.handles),
            alternate_names: normalize_terms(config.alternate_names),
            negative_keywords: normalize_terms(config.negative_keywords),
            is_nonspecific: config.nonspecific,
            is_food_related: config.food_related,
        }
    }
}

/// Lowercase, trim, drop empties and duplicates while keeping first-seen order.
pub(crate) fn normalize_terms(terms: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    terms
        .into_iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Immutable brand catalog, iterated in file order.
#[derive(Debug, Clone, Default)]
pub struct BrandRegistry {
    brands: Vec<Brand>,
}

impl BrandRegistry {
    /// Build a registry from already-normalised brands.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] on empty or duplicate identifiers.
    pub fn new(brands: Vec<Brand>) -> Result<Self, ConfigError> {
        validate_brands(&brands)?;
        Ok(Self { brands })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brand> {
        self.brands.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.brands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }
}

/// Load and validate the brand registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_brands(path: &Path) -> Result<BrandRegistry, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let brands_file: BrandsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::BrandsFileParse)?;

    BrandRegistry::new(brands_file.brands.into_iter().map(Brand::from).collect())
}

fn validate_brands(brands: &[Brand]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();
    let mut seen_snake = HashSet::new();

    for brand in brands {
        if brand.id.is_empty() {
            return Err(ConfigError::Validation(format!(
                "brand '{}' must have a non-empty id",
                brand.display_name
            )));
        }

        if brand.display_name.is_empty() {
            return Err(ConfigError::Validation(format!(
                "brand '{}' must have a non-empty name",
                brand.id
            )));
        }

        if !seen_ids.insert(brand.id.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand id: '{}'",
                brand.id
            )));
        }

        if !seen_names.insert(brand.lowercase_name()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand name: '{}'",
                brand.display_name
            )));
        }

        let snake = brand.snake_name();
        if !seen_snake.insert(snake.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand snake name: '{snake}' (from brand '{}')",
                brand.display_name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "brands_test.rs"]
mod tests;
