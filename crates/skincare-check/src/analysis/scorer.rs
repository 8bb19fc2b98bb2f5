use super::domain::{AnalysisReport, Finding, SkinFocus, TagSummary};
use super::knowledge_base::IngredientLookup;
use super::rubric::ScoringRubric;

/// Scores an ingredient list with the standard rubric.
pub fn analyze<S, L>(ingredients: &[S], skin_focus: Option<SkinFocus>, lookup: &L) -> AnalysisReport
where
    S: AsRef<str>,
    L: IngredientLookup + ?Sized,
{
    analyze_with_rubric(ingredients, skin_focus, lookup, &ScoringRubric::standard())
}

/// Scores an ingredient list.
///
/// Unknown ingredients are skipped entirely. Every recognized ingredient becomes a
/// finding and contributes its tags to the summary; only severities above zero
/// reduce the score. Findings come back ordered by descending severity, keeping
/// label order among equals.
pub fn analyze_with_rubric<S, L>(
    ingredients: &[S],
    skin_focus: Option<SkinFocus>,
    lookup: &L,
    rubric: &ScoringRubric,
) -> AnalysisReport
where
    S: AsRef<str>,
    L: IngredientLookup + ?Sized,
{
    let mut penalty: u64 = 0;
    let mut findings = Vec::new();
    let mut summary = TagSummary::new();

    for ingredient in ingredients {
        let ingredient = ingredient.as_ref();
        let Some(info) = lookup.lookup(ingredient) else {
            continue;
        };

        if info.severity > 0 {
            let boosted = skin_focus.is_some_and(|focus| focus.boosts(&info));
            penalty = penalty.saturating_add(rubric.penalty_for(info.severity, boosted));
        }

        for tag in &info.tags {
            *summary.entry(tag.clone()).or_insert(0) += 1;
        }

        findings.push(Finding::new(ingredient, info));
    }

    let score = rubric.score_for(penalty);
    let verdict = rubric.verdict_for(score);

    // sort_by is stable, so equal severities keep label order
    findings.sort_by(|a, b| b.severity.cmp(&a.severity));

    AnalysisReport {
        verdict,
        score,
        findings,
        summary,
    }
}
