use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::knowledge_base::IngredientLookup;
use super::service::{AnalysisError, IngredientAnalyzer};

/// Body accepted by the analysis endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub skin_focus: Option<String>,
}

/// Router builder exposing the ingredient analysis endpoint.
pub fn analysis_router<L>(service: Arc<IngredientAnalyzer<L>>) -> Router
where
    L: IngredientLookup + 'static,
{
    Router::new()
        .route("/api/v1/analyze", post(analyze_handler::<L>))
        .with_state(service)
}

pub(crate) async fn analyze_handler<L>(
    State(service): State<Arc<IngredientAnalyzer<L>>>,
    axum::Json(request): axum::Json<AnalysisRequest>,
) -> Response
where
    L: IngredientLookup + 'static,
{
    match service.check(&request.ingredients, request.skin_focus.as_deref()) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error @ AnalysisError::EmptyIngredients) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
