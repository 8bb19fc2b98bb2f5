use super::domain::IngredientInfo;
use super::normalizer::normalize_ingredient;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read-only lookup of hazard metadata by canonical ingredient name.
pub trait IngredientLookup: Send + Sync {
    fn lookup(&self, name: &str) -> Option<IngredientInfo>;
}

impl<F> IngredientLookup for F
where
    F: Fn(&str) -> Option<IngredientInfo> + Send + Sync,
{
    fn lookup(&self, name: &str) -> Option<IngredientInfo> {
        self(name)
    }
}

/// Error raised while loading an ingredient dataset.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeBaseError {
    #[error("failed to open ingredient dataset {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed ingredient dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("ingredient dataset row {row} has an empty name")]
    EmptyName { row: usize },
}

/// In-memory ingredient table keyed by canonical name.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: HashMap<String, IngredientInfo>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in dataset shipped with the service.
    pub fn standard() -> Self {
        let mut base = Self::new();
        base.insert(
            "fragrance",
            IngredientInfo::new(
                ["fragrance", "irritant"],
                4,
                "Fragrance can irritate sensitive skin.",
            ),
        );
        base.insert(
            "parfum",
            IngredientInfo::new(["fragrance", "irritant"], 4, "Parfum is the same as fragrance."),
        );
        base.insert(
            "denatured alcohol",
            IngredientInfo::new(["drying", "irritant"], 3, "Can be drying for some skin types."),
        );
        base.insert(
            "alcohol denat",
            IngredientInfo::new(["drying", "irritant"], 3, "Can be drying for some skin types."),
        );
        base.insert(
            "limonene",
            IngredientInfo::new(["allergen", "fragrance"], 3, "Common fragrance allergen."),
        );
        base.insert(
            "linalool",
            IngredientInfo::new(["allergen", "fragrance"], 3, "Common fragrance allergen."),
        );
        base.insert(
            "niacinamide",
            IngredientInfo::new(["beneficial"], 0, "Supports skin barrier and tone."),
        );
        base.insert(
            "glycerin",
            IngredientInfo::new(["beneficial"], 0, "Hydrating."),
        );
        base
    }

    /// Loads `name,tags,severity,note` rows; tags are `|`-separated.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, KnowledgeBaseError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut base = Self::new();

        for (index, record) in csv_reader.deserialize::<DatasetRow>().enumerate() {
            let row = record?;
            let name = normalize_ingredient(&row.name);
            if name.is_empty() {
                return Err(KnowledgeBaseError::EmptyName { row: index + 1 });
            }

            let tags = row
                .tags
                .split('|')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_lowercase);
            base.entries
                .insert(name, IngredientInfo::new(tags, row.severity, row.note));
        }

        Ok(base)
    }

    pub fn from_csv_path(path: &Path) -> Result<Self, KnowledgeBaseError> {
        let file = File::open(path).map_err(|source| KnowledgeBaseError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_csv_reader(file)
    }

    pub fn insert(&mut self, name: &str, info: IngredientInfo) {
        self.entries.insert(normalize_ingredient(name), info);
    }

    /// Overlays `other`; its entries win on conflicting names.
    pub fn extend(&mut self, other: KnowledgeBase) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IngredientLookup for KnowledgeBase {
    /// Keys are canonicalized like `insert`, so raw label spellings match too.
    fn lookup(&self, name: &str) -> Option<IngredientInfo> {
        let key = normalize_ingredient(name);
        if key.is_empty() {
            return None;
        }
        self.entries.get(&key).cloned()
    }
}

#[derive(Debug, Deserialize)]
struct DatasetRow {
    name: String,
    #[serde(default)]
    tags: String,
    severity: u32,
    #[serde(default)]
    note: String,
}
