use anyhow::Result;
use tracing::info;

use parkforms_client::app::AppShell;
use parkforms_client::logging;
use parkforms_client::settings::Settings;
use shared::config::ConfigHandle;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    logging::init_logging(&settings.logging);

    info!("Starting ParkForms client v{}", env!("CARGO_PKG_VERSION"));

    // Resolve the runtime config document: URL wins, then the local file.
    // Neither is allowed to abort startup.
    let config = ConfigHandle::new();
    if !settings.runtime.config_url.is_empty() {
        config.load_from_url(&settings.runtime.config_url).await;
    } else {
        config.load_from_file(std::path::Path::new(&settings.runtime.config_path));
    }
    let runtime = config.get();
    info!(
        api_base = %runtime.api_base,
        local_mode = runtime.is_local_mode(),
        "Runtime config loaded"
    );

    let shell = AppShell::new(&settings, config)?;

    if !settings.auth.username.is_empty() {
        let profile = shell
            .auth
            .login(&settings.auth.username, &settings.auth.password)
            .await?;
        info!(user = %profile.name, role = %profile.role, "Signed in");
    }

    let projects = shell
        .projects
        .catalog(&domain::models::project::ProjectFilters::default())
        .await?;
    info!(total = projects.total, "Project catalog ready");

    let stats = shell.refresh_batch_page().await?;
    info!(
        total = stats.total,
        pending = stats.pending,
        processing = stats.processing,
        completed = stats.completed,
        error = stats.error,
        "Batch dashboard ready"
    );

    Ok(())
}
