use anyhow::Result;
use lexpress_core::application::{ports::time::Clock, services::ApplicationServices};
use lexpress_core::config::AppConfig;
use lexpress_core::domain::{
    content::{CommentRepository, ContentReadRepository, ContentWriteRepository, LikeRepository},
    user::UserRepository,
};
use lexpress_core::infrastructure::{
    database,
    repositories::{
        PostgresCommentRepository, PostgresContentReadRepository, PostgresContentWriteRepository,
        PostgresLikeRepository, PostgresUserRepository,
    },
    security::HmacViewerProvider,
    time::SystemClock,
};
use lexpress_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(
        config.database_url(),
        config.database_max_connections(),
        config.database_acquire_timeout(),
    )
    .await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let content_read_repo: Arc<dyn ContentReadRepository> =
        Arc::new(PostgresContentReadRepository::new(pool.clone()));
    let content_write_repo: Arc<dyn ContentWriteRepository> =
        Arc::new(PostgresContentWriteRepository::new(pool.clone()));
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool.clone()));
    let like_repo: Arc<dyn LikeRepository> = Arc::new(PostgresLikeRepository::new(pool));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let viewer_provider = Arc::new(HmacViewerProvider::new(
        config.session_signing_secret().as_bytes(),
        Arc::clone(&clock),
    )?);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        content_read_repo,
        content_write_repo,
        comment_repo,
        like_repo,
        viewer_provider,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
