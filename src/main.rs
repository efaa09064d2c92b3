use actix_cors::Cors;
use actix_web::{App, HttpServer};
use tracing::{info, Level};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi; // bring trait into scope for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

use school_admin::openapi::ApiDoc;
use school_admin::settings::AppConfig;
use school_admin::{config, AdminPanel};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env automatically only in debug builds; deployments set the environment themselves.
    if cfg!(debug_assertions) {
        let _ = dotenv::dotenv();
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let settings = AppConfig::from_env();
    info!(?settings, "Bootstrapping school admin server");

    // The data layer lives in-process; building it here seeds the stores and
    // logs their sizes before the first request arrives.
    let panel = AdminPanel::from_config(&settings);
    let stats = panel.alerts().stats();
    info!(active_alerts = stats.active, urgent = stats.by_priority.urgent, "alerts loaded");

    let openapi = ApiDoc::openapi();
    let frontend = settings.frontend_url.clone();

    let server = HttpServer::new(move || {
        let cors = match &frontend {
            Some(origin) => Cors::default().allowed_origin(origin),
            None => Cors::default().allow_any_origin(),
        }
        .allowed_methods(["POST", "OPTIONS"])
        .allow_any_header()
        .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .configure(config)
            .service(SwaggerUi::new("/docs/{_:.*}").url("/docs/openapi.json", openapi.clone()))
    })
    .bind((settings.bind_addr.as_str(), settings.port))?;

    info!("Listening on http://{}:{}", settings.bind_addr, settings.port);

    server.run().await?;
    Ok(())
}
