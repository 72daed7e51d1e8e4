//! Career Compass server entry point.

use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use career_compass::adapters::ai::{GeminiConfig, GeminiInsightGenerator};
use career_compass::adapters::auth::{JwtConfig, JwtIdentityResolver};
use career_compass::adapters::cache::RedisInvalidator;
use career_compass::adapters::http::profile::{profile_routes, ProfileHandlers};
use career_compass::adapters::postgres::{PgInsightRepository, PgUserRepository};
use career_compass::application::handlers::insight::InsightProvisioner;
use career_compass::application::handlers::profile::{
    OnboardingStatusHandler, UpdateProfileHandler,
};
use career_compass::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Ports wired to their production adapters.
    let identity = Arc::new(JwtIdentityResolver::new(&JwtConfig::new(
        config.auth.jwt_secret.expose_secret(),
        config.auth.jwt_issuer.clone(),
    )));
    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let insights = Arc::new(PgInsightRepository::new(pool));
    let generator = Arc::new(GeminiInsightGenerator::new(
        GeminiConfig::new(config.ai.gemini_api_key.expose_secret())
            .with_model(config.ai.model.clone())
            .with_timeout(Duration::from_secs(config.ai.timeout_secs)),
    )?);
    let invalidator = Arc::new(RedisInvalidator::new(&config.redis.url)?);

    let provisioner = Arc::new(InsightProvisioner::new(insights, generator));
    let update_handler = Arc::new(UpdateProfileHandler::new(
        identity.clone(),
        users.clone(),
        provisioner,
        invalidator,
    ));
    let onboarding_handler = Arc::new(OnboardingStatusHandler::new(identity, users));

    let app = axum::Router::new()
        .nest(
            "/api/profile",
            profile_routes(ProfileHandlers::new(update_handler, onboarding_handler)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "career-compass listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
