//! BAT-VC Studio API server.

use std::error::Error;
use std::sync::Arc;

use sqlx::PgPool;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use batvc_studio::adapters::ai::{OpenAIConfig, OpenAIProvider};
use batvc_studio::adapters::auth::{JwtConfig, JwtSessionValidator};
use batvc_studio::adapters::http::{api_router, ApiServices, HttpSettings};
use batvc_studio::adapters::postgres::{
    PostgresConversationRepository, PostgresJourneyRepository, PostgresPortfolioRepository,
};
use batvc_studio::application::{AdvisoryRouter, AdvisorySettings};
use batvc_studio::config::{AiConfig, AppConfig, DatabaseConfig};
use batvc_studio::ports::AIProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let advisory = Arc::new(advisory_router(&config.ai));
    info!(
        environment = ?config.server.environment,
        ai_backend = advisory.has_backend(),
        "Starting BAT-VC Studio API"
    );

    let pool = connect(&config.database).await?;

    let mut jwt = JwtConfig::new(config.auth.jwt_secret.clone());
    if let Some(issuer) = &config.auth.issuer {
        jwt = jwt.with_issuer(issuer.clone());
    }

    let services = ApiServices {
        journeys: Arc::new(PostgresJourneyRepository::new(pool.clone())),
        portfolios: Arc::new(PostgresPortfolioRepository::new(pool.clone())),
        conversations: Arc::new(PostgresConversationRepository::new(pool.clone())),
        advisory,
        sessions: Arc::new(JwtSessionValidator::new(jwt)),
    };
    let settings = HttpSettings {
        cors_origins: config.server.cors_origins_list(),
        request_timeout: config.server.request_timeout(),
    };
    let app = api_router(services, &settings);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = config.pool_options().connect(config.url()).await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    Ok(pool)
}

/// The backend is optional; without a key every advisory call is answered by
/// the fallback generators.
fn advisory_router(config: &AiConfig) -> AdvisoryRouter {
    let settings = AdvisorySettings {
        timeout: config.timeout(),
        temperature: config.temperature,
        max_tokens: config.max_tokens,
        chat_max_tokens: config.chat_max_tokens,
    };

    if !config.has_backend() {
        info!("No generative backend key configured; using fallbacks only");
    }

    let backend = config.api_key().and_then(|key| {
        let provider_config = OpenAIConfig::new(key)
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone())
            .with_timeout(config.timeout());
        match OpenAIProvider::new(provider_config) {
            Ok(provider) => Some(Arc::new(provider) as Arc<dyn AIProvider>),
            Err(e) => {
                warn!(error = %e, "Generative backend unavailable; using fallbacks only");
                None
            }
        }
    });

    AdvisoryRouter::new(backend, settings)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
