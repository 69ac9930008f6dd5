pub mod auth;
pub mod health;
pub mod negotiation;
pub mod portfolio;
pub mod reference;
pub mod resume;
pub mod vacancy;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/auth/status", get(auth::auth_status))
        .route("/api/vacancies", get(vacancy::search_vacancies))
        .route("/api/vacancies/:id", get(vacancy::get_vacancy))
        .route("/api/resumes/mine", get(resume::list_my_resumes))
        .route(
            "/api/resumes/:id",
            get(resume::get_resume).put(resume::update_resume),
        )
        .route("/api/resumes/:id/publish", post(resume::publish_resume))
        .route(
            "/api/negotiations",
            get(negotiation::list_negotiations).post(negotiation::apply_to_vacancy),
        )
        .route("/api/portfolio", get(portfolio::list_portfolio))
        .route("/api/profile", get(portfolio::get_profile))
        .route("/api/reference/areas", get(reference::areas))
        .route("/api/reference/dictionaries", get(reference::dictionaries));

    Router::new()
        .route("/health", get(health::health))
        .merge(api)
        .layer(
            CorsLayer::new()
                .allow_methods(Any)
                .allow_headers(Any)
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
