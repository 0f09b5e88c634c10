//! Employee Management - Navigation Bar
//!
//! Launches the Dioxus app (server-rendered with client hydration).

use employee_nav::app::App;

fn main() {
    #[cfg(feature = "server")]
    {
        if let Err(e) = init_server() {
            eprintln!("Failed to start: {:#}", e);
            std::process::exit(1);
        }
    }

    dioxus::launch(App);
}

/// Load configuration and initialize logging before the server starts.
#[cfg(feature = "server")]
fn init_server() -> anyhow::Result<()> {
    use employee_nav::config;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let config = config::load_config()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::info!(
        "Starting Employee Navigation v{} ({})",
        env!("EMS_VERSION"),
        env!("EMS_GIT_SHA")
    );

    // The fullstack server binds to PORT
    if std::env::var("PORT").is_err() {
        std::env::set_var("PORT", config.port.to_string());
    }
    tracing::info!("Configuration loaded, port: {}", config.port);

    Ok(())
}
