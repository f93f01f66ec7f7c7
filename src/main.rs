use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info, warn};

use inquirydesk::web::{shutdown_signal, WebServer};
use inquirydesk::{Config, Database, HttpMailer, InquiryWorkflow, LogNotifier, Notifier};

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let config = match Config::load_with_env(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {CONFIG_PATH}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = inquirydesk::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        inquirydesk::logging::init_console_only(&config.logging.level);
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> inquirydesk::Result<()> {
    config.validate()?;

    info!("inquirydesk - {}", config.mail.brand_name);

    let db = Database::open(&config.database.path).await?;
    info!(path = %config.database.path, "Database ready");

    let notifier: Arc<dyn Notifier> = if config.mail.enabled {
        info!(api_url = %config.mail.api_url, "Outbound mail enabled");
        Arc::new(HttpMailer::new(&config.mail)?)
    } else {
        warn!("Outbound mail disabled, notifications are only logged");
        Arc::new(LogNotifier::new())
    };

    let workflow = InquiryWorkflow::from_config(db.clone(), &config, notifier);
    let dispatcher = workflow.dispatcher().clone();

    let server = WebServer::new(&config.server, workflow, config.mail.brand_name.clone())?;
    server.run(shutdown_signal()).await?;

    info!(pending = dispatcher.in_flight(), "Waiting for background notifications");
    dispatcher.shutdown().await;
    db.close().await;

    info!("Shutdown complete");
    Ok(())
}
