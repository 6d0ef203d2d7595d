use serde_json::Value;
use std::path::Path;
use thiserror::Error;

use crate::models::PetRecord;

/// Output field carrying the capitalized category of a matched record
pub const CATEGORY_FIELD: &str = "categoria";

/// Errors raised while loading the catalog document
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog root must be an object of category -> list of pets")]
    NotAnObject,

    #[error("Invalid records in category '{category}': {source}")]
    InvalidCategory {
        category: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One named group of pet records
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub pets: Vec<PetRecord>,
}

/// Read-only pet catalog, grouped by category in document order
///
/// Loaded once at startup and shared behind an `Arc`; there is no way to
/// mutate it after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Load the catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_json_str(&raw)?;

        tracing::info!(
            "Loaded catalog from {}: {} categories, {} records",
            path.display(),
            catalog.len(),
            catalog.record_count()
        );

        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Build from an already parsed document, keeping key order
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        let Value::Object(map) = value else {
            return Err(CatalogError::NotAnObject);
        };

        let categories = map
            .into_iter()
            .map(|(name, pets)| {
                let mut pets: Vec<PetRecord> = serde_json::from_value(pets).map_err(|source| {
                    CatalogError::InvalidCategory {
                        category: name.clone(),
                        source,
                    }
                })?;

                // `categoria` is reserved for the annotation added on query
                for (index, pet) in pets.iter_mut().enumerate() {
                    if let Some(shadowed) = pet.extra.shift_remove(CATEGORY_FIELD) {
                        tracing::warn!(
                            "Dropping '{}' field ({}) from record {} of category '{}'",
                            CATEGORY_FIELD,
                            shadowed,
                            index,
                            name
                        );
                    }
                }

                Ok(Category { name, pets })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category names in catalog order
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Look up a category by its exact name
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.categories.iter().map(|c| c.pets.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "gato": [{"raca": "Siamês"}],
        "cachorro": [{"raca": "Labrador"}, {"raca": "Poodle"}],
        "ave": []
    }"#;

    #[test]
    fn test_keeps_document_order() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.category_names(), vec!["gato", "cachorro", "ave"]);
        assert_eq!(catalog.record_count(), 3);
        assert_eq!(catalog.get("cachorro").unwrap().pets[1].breed.as_deref(), Some("Poodle"));
        assert!(catalog.get("Cachorro").is_none());
    }

    #[test]
    fn test_drops_reserved_category_field() {
        let catalog =
            Catalog::from_json_str(r#"{"gato": [{"raca": "Persa", "categoria": "felino", "porte": "médio"}]}"#)
                .unwrap();

        let pet = &catalog.get("gato").unwrap().pets[0];
        assert!(!pet.extra.contains_key(CATEGORY_FIELD));
        assert_eq!(pet.extra["porte"], "médio");
    }

    #[test]
    fn test_rejects_non_object_root() {
        let err = Catalog::from_json_str(r#"[{"raca": "Labrador"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::NotAnObject));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Catalog::from_json_str(r#"{"gato": [{"raca": }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_rejects_category_that_is_not_a_list() {
        let err = Catalog::from_json_str(r#"{"gato": {"raca": "Siamês"}}"#).unwrap_err();
        match err {
            CatalogError::InvalidCategory { category, .. } => assert_eq!(category, "gato"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
