use metrics_exporter_prometheus::PrometheusHandle;
use skincare_check::analysis::KnowledgeBase;
use skincare_check::config::KnowledgeBaseConfig;
use skincare_check::error::AppError;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Built-in dataset, overlaid with the configured CSV when one is set.
pub(crate) fn load_knowledge_base(config: &KnowledgeBaseConfig) -> Result<KnowledgeBase, AppError> {
    let mut base = KnowledgeBase::standard();

    if let Some(path) = &config.dataset_csv {
        let dataset = KnowledgeBase::from_csv_path(path)?;
        info!(path = %path.display(), entries = dataset.len(), "ingredient dataset loaded");
        base.extend(dataset);
    }

    Ok(base)
}
