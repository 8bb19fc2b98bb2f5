use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::domain::{Finding, SkinFocus, TagSummary, Verdict};
use super::knowledge_base::IngredientLookup;
use super::normalizer::parse_ingredients;
use super::rubric::ScoringRubric;
use super::scorer::analyze_with_rubric;

/// Caller-level validation failures raised before the analysis runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Please paste product ingredients.")]
    EmptyIngredients,
}

/// Report exposed to API and CLI callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisView {
    pub verdict: Verdict,
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_focus: Option<SkinFocus>,
    pub parsed_ingredients: Vec<String>,
    pub findings: Vec<Finding>,
    pub summary: TagSummary,
}

/// Runs label text through normalization and scoring against a shared lookup.
pub struct IngredientAnalyzer<L> {
    lookup: Arc<L>,
    rubric: ScoringRubric,
}

impl<L> IngredientAnalyzer<L>
where
    L: IngredientLookup,
{
    pub fn new(lookup: Arc<L>) -> Self {
        Self::with_rubric(lookup, ScoringRubric::standard())
    }

    pub fn with_rubric(lookup: Arc<L>, rubric: ScoringRubric) -> Self {
        Self { lookup, rubric }
    }

    pub fn rubric(&self) -> &ScoringRubric {
        &self.rubric
    }

    pub fn check(&self, raw: &str, skin_focus: Option<&str>) -> Result<AnalysisView, AnalysisError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AnalysisError::EmptyIngredients);
        }

        let skin_focus = SkinFocus::from_optional(skin_focus);
        let parsed_ingredients = parse_ingredients(raw);
        let report = analyze_with_rubric(
            &parsed_ingredients,
            skin_focus,
            self.lookup.as_ref(),
            &self.rubric,
        );

        debug!(
            ingredients = parsed_ingredients.len(),
            findings = report.findings.len(),
            "ingredient list scored"
        );
        info!(
            score = report.score,
            verdict = report.verdict.label(),
            focus = skin_focus.map(|focus| focus.label()),
            "analysis complete"
        );

        Ok(AnalysisView {
            verdict: report.verdict,
            score: report.score,
            skin_focus,
            parsed_ingredients,
            findings: report.findings,
            summary: report.summary,
        })
    }
}
