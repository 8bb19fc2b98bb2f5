use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tag counts across all findings, keyed by tag name.
pub type TagSummary = BTreeMap<String, usize>;

/// Skin concern stated by the user; boosts penalties for matching tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinFocus {
    Sensitive,
    AcneProne,
}

impl SkinFocus {
    /// Exact match on `sensitive` or `acne_prone`; any other value means no focus.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sensitive" => Some(Self::Sensitive),
            "acne_prone" => Some(Self::AcneProne),
            _ => None,
        }
    }

    pub fn from_optional(value: Option<&str>) -> Option<Self> {
        value.and_then(Self::parse)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkinFocus::Sensitive => "Sensitive",
            SkinFocus::AcneProne => "Acne-prone",
        }
    }

    pub(crate) fn boosts(&self, info: &IngredientInfo) -> bool {
        match self {
            SkinFocus::Sensitive => info.has_tag("irritant") || info.has_tag("allergen"),
            SkinFocus::AcneProne => info.has_tag("comedogenic"),
        }
    }
}

/// Hazard metadata for one canonical ingredient name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientInfo {
    pub tags: Vec<String>,
    pub severity: u32,
    pub note: String,
}

impl IngredientInfo {
    /// Tags keep their listed order; repeats are dropped so each counts once.
    pub fn new<I, T>(tags: I, severity: u32, note: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.into();
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }

        Self {
            tags: unique,
            severity,
            note: note.into(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

/// A recognized ingredient together with the metadata it was scored with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub ingredient: String,
    pub tags: Vec<String>,
    pub severity: u32,
    pub note: String,
}

impl Finding {
    pub(crate) fn new(ingredient: &str, info: IngredientInfo) -> Self {
        Self {
            ingredient: ingredient.to_string(),
            tags: info.tags,
            severity: info.severity,
            note: info.note,
        }
    }
}

/// Three-way classification of the final score. Ordered `Avoid < Caution < Safe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Verdict {
    Avoid,
    Caution,
    Safe,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Safe => "Safe",
            Verdict::Caution => "Caution",
            Verdict::Avoid => "Avoid",
        }
    }
}

/// Scoring output for one ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub verdict: Verdict,
    pub score: u8,
    pub findings: Vec<Finding>,
    pub summary: TagSummary,
}
