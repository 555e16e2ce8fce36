use outbreak_classifier::Predictor;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
}
