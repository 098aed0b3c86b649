use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryAccountDirectory, InMemoryStudentRepository, RecordingMailer,
};
use crate::routes::with_signup_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use campus_portal::config::AppConfig;
use campus_portal::error::AppError;
use campus_portal::signup::{NoticeConfig, SignUpService};
use campus_portal::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let students = Arc::new(InMemoryStudentRepository::default());
    let directory = Arc::new(match config.portal.admin_mailbox.clone() {
        Some(mailbox) => InMemoryAccountDirectory::with_admin(mailbox),
        None => {
            warn!("PORTAL_ADMIN_MAILBOX unset; registration notices will skip the admin copy");
            InMemoryAccountDirectory::default()
        }
    });
    let mailer = Arc::new(RecordingMailer::default());
    let signup_service = Arc::new(SignUpService::new(
        students,
        directory,
        mailer,
        NoticeConfig::default(),
    ));

    let app = with_signup_routes(signup_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "student sign-up portal ready");

    axum::serve(listener, app).await?;
    Ok(())
}
