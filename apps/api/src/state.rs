use std::sync::Arc;

use crate::advisor::catalog::DomainCatalog;
use crate::advisor::skill_fit::SkillFitScorer;
use crate::config::Config;
use crate::dataset::Dataset;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only afterwards.
    pub dataset: Arc<Dataset>,
    pub catalog: Arc<DomainCatalog>,
    pub sessions: SessionStore,
    pub config: Config,
    /// Pluggable radar scorer. Default: KeywordSkillFitScorer.
    pub skill_fit_scorer: Arc<dyn SkillFitScorer>,
}
