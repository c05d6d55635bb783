//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::application::mapping::TaskMapper;
use crate::application::services::{
    AuthService, AuthServiceImpl, JwtService, LabelService, LabelServiceImpl, SeedService,
    TaskService, TaskServiceImpl, TaskStatusService, TaskStatusServiceImpl, UserService,
    UserServiceImpl,
};
use crate::config::Settings;
use crate::domain::{LabelRepository, TaskRepository, TaskStatusRepository, UserRepository};
use crate::infrastructure::database::{self, DatabaseProbe, PgProbe};
use crate::infrastructure::error_reporting::{ErrorReporter, TracingErrorReporter};
use crate::infrastructure::repositories::{
    PgLabelRepository, PgTaskRepository, PgTaskStatusRepository, PgUserRepository,
};
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Storage backends for the four resources.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub task_statuses: Arc<dyn TaskStatusRepository>,
    pub labels: Arc<dyn LabelRepository>,
    pub tasks: Arc<dyn TaskRepository>,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthService>,
    pub jwt: JwtService,
    pub users: Arc<dyn UserService>,
    pub task_statuses: Arc<dyn TaskStatusService>,
    pub labels: Arc<dyn LabelService>,
    pub tasks: Arc<dyn TaskService>,
    pub probe: Arc<dyn DatabaseProbe>,
    pub error_reporter: Arc<dyn ErrorReporter>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire services on top of the given repositories.
    pub fn new(
        settings: Settings,
        repos: Repositories,
        probe: Arc<dyn DatabaseProbe>,
        error_reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        let jwt = JwtService::new(settings.jwt.clone());
        let mapper = TaskMapper::new(
            repos.task_statuses.clone(),
            repos.users.clone(),
            repos.labels.clone(),
        );

        Self {
            auth: Arc::new(AuthServiceImpl::new(repos.users.clone(), jwt.clone())),
            jwt,
            users: Arc::new(UserServiceImpl::new(repos.users.clone())),
            task_statuses: Arc::new(TaskStatusServiceImpl::new(repos.task_statuses.clone())),
            labels: Arc::new(LabelServiceImpl::new(repos.labels.clone())),
            tasks: Arc::new(TaskServiceImpl::new(
                repos.tasks.clone(),
                repos.task_statuses.clone(),
                mapper,
            )),
            probe,
            error_reporter,
            settings: Arc::new(settings),
        }
    }
}

/// Full router with request tracing and CORS.
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(logging::create_trace_layer())
            .layer(cors),
    )
}

/// Create whatever default rows are missing.
pub async fn seed(repos: &Repositories, settings: &Settings) -> Result<()> {
    if !settings.seed.enabled {
        tracing::debug!("Seeding disabled");
        return Ok(());
    }

    SeedService::new(
        repos.users.clone(),
        repos.task_statuses.clone(),
        repos.labels.clone(),
    )
    .run(&settings.seed)
    .await?;

    Ok(())
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        // Create database pool
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db).await?;
            tracing::info!("Database migrations applied");
        }

        let repos = Repositories {
            users: Arc::new(PgUserRepository::new(db.clone())),
            task_statuses: Arc::new(PgTaskStatusRepository::new(db.clone())),
            labels: Arc::new(PgLabelRepository::new(db.clone())),
            tasks: Arc::new(PgTaskRepository::new(db.clone())),
        };

        seed(&repos, &settings).await?;

        let error_reporter = Arc::new(TracingErrorReporter::new(
            &settings.error_reporting,
            &settings.environment,
        ));

        let addr: SocketAddr = settings.server_addr().parse()?;
        let state = AppState::new(settings, repos, Arc::new(PgProbe::new(db)), error_reporter);
        let router = build_router(state);

        // Bind to address
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
