use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::analysis::{
    analysis_router, IngredientAnalyzer, IngredientInfo, KnowledgeBase,
};

/// Labels exercising asides, separators, casing and stray parentheses.
pub(super) const SAMPLE_LABELS: &[&str] = &[
    "",
    "Water, Glycerin, Niacinamide",
    "Aqua/Water (Eau), Glycerin;glycerin\nFRAGRANCE\t fragrance ",
    "Alcohol Denat (Drying Agent), Glycerin",
    "A (B (C)) D",
    "(only an aside)",
    "Shea (Butyrospermum Parkii) Butter, , ,;;",
    "Tocopherol (Vit E",
    ")) stray, ( open",
    "  Linalool  ,Limonene,\tLINALOOL\r\n Parfum/Fragrance ",
];

/// Standard dataset plus comedogenic entries for acne-prone scoring.
pub(super) fn knowledge_base() -> KnowledgeBase {
    let mut base = KnowledgeBase::standard();
    base.insert(
        "coconut oil",
        IngredientInfo::new(["comedogenic", "emollient"], 3, "Can clog pores."),
    );
    base.insert(
        "isopropyl myristate",
        IngredientInfo::new(["comedogenic"], 4, "Highly pore-clogging."),
    );
    base.insert(
        "salicylic acid",
        IngredientInfo::new(["beneficial", "exfoliant"], 1, "Unclogs pores; can sting."),
    );
    base
}

pub(super) fn analyzer() -> IngredientAnalyzer<KnowledgeBase> {
    IngredientAnalyzer::new(Arc::new(knowledge_base()))
}

pub(super) fn router() -> axum::Router {
    analysis_router(Arc::new(analyzer()))
}

pub(super) fn severity_lookup(severity: u32) -> impl Fn(&str) -> Option<IngredientInfo> {
    move |name: &str| {
        (name == "hazard").then(|| IngredientInfo::new(["irritant"], severity, "fixture"))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
