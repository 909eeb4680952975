use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::clients::openai::{CompletionClient, OpenAiClient};
use crate::config::Config;
use crate::db::Store;
use crate::services::PromptRefinementService;

mod error;
mod prompts;
mod types;
mod users;

pub use error::ApiError;
pub use types::*;

pub struct AppState {
    pub config: Config,

    pub store: Store,

    pub refine_service: PromptRefinementService,
}

pub async fn create_app_state(config: Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let client = Arc::new(OpenAiClient::new(config.openai.clone())?);

    create_app_state_with_client(config, store, client)
}

/// State constructor taking an explicit completion backend; integration tests
/// use this to substitute a canned client.
pub fn create_app_state_with_client(
    config: Config,
    store: Store,
    client: Arc<dyn CompletionClient>,
) -> anyhow::Result<Arc<AppState>> {
    let refine_service = PromptRefinementService::new(store.clone(), client);

    Ok(Arc::new(AppState {
        config,
        store,
        refine_service,
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/users", post(users::create_user))
        .route("/users/login", post(users::login))
        .route("/users/{id}", get(users::get_user))
        .route("/users/{id}", put(users::update_user))
        .route("/users/{id}", delete(users::delete_user))
        .route("/api/v1/prompts", post(prompts::receive_prompt))
        .route("/refine-prompt", post(prompts::refine_prompt))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
