//! Ingredient label analysis: normalization, knowledge-base lookup and scoring.
//!
//! Everything here is request-scoped. The only shared value is the lookup, which is
//! read-only once built, so analyzers can be cloned behind an `Arc` into any number
//! of handlers.

pub mod domain;
pub mod knowledge_base;
pub mod normalizer;
pub mod router;
mod rubric;
mod scorer;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{AnalysisReport, Finding, IngredientInfo, SkinFocus, TagSummary, Verdict};
pub use knowledge_base::{IngredientLookup, KnowledgeBase, KnowledgeBaseError};
pub use normalizer::{normalize_ingredient, parse_ingredients};
pub use router::{analysis_router, AnalysisRequest};
pub use rubric::ScoringRubric;
pub use scorer::{analyze, analyze_with_rubric};
pub use service::{AnalysisError, AnalysisView, IngredientAnalyzer};
