use std::sync::Arc;

use dotenvy::dotenv;
use models::db::{self, DatabaseConfig};
use service::{products::ProductsService, seed::SeedService};
use tracing::{error, info, warn};
use uuid::Uuid;

/// `config.toml` (or `CONFIG_PATH`) first, environment variables second.
fn load_config() -> anyhow::Result<(configs::AppConfig, bool)> {
    if let Ok(cfg) = configs::AppConfig::load_and_validate() {
        return Ok((cfg, true));
    }
    Ok((configs::AppConfig::from_env()?, false))
}

async fn run(cfg: &configs::AppConfig) -> anyhow::Result<&'static str> {
    let db = db::connect_and_migrate(&DatabaseConfig::from(&cfg.database)).await?;
    let seeder = SeedService::new(Arc::new(ProductsService::new(db)));
    Ok(seeder.run_seed().await?)
}

fn main() -> std::process::ExitCode {
    dotenv().ok();

    let (cfg, used_file) = match load_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            common::utils::logging::init_logging_default();
            error!(service = "seed", event = "config_invalid", error = %e, "no usable configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    common::utils::logging::init_logging(&cfg.logging.format);
    if !used_file {
        warn!(service = "seed", event = "config_fallback", "config file unavailable, using environment");
    }

    let run_id = Uuid::new_v4();
    let pid = std::process::id();

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "seed", event = "panic", %run_id, pid, message = %info, "unhandled panic occurred");
    }));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.runtime.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "seed", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "seed",
        event = "start",
        %run_id,
        pid,
        version = env!("CARGO_PKG_VERSION"),
        threads = cfg.runtime.worker_threads.unwrap_or_default(),
        "seed starting"
    );

    match rt.block_on(run(&cfg)) {
        Ok(msg) => {
            info!(service = "seed", event = "stop", %run_id, "{msg}");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "seed", event = "run_failed", %run_id, error = %e, "seed failed");
            std::process::ExitCode::FAILURE
        }
    }
}
