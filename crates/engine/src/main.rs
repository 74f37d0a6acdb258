//! Yono-Komae engine runner - generates one battle and asks the judge panel.

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yonokomae_domain::{Judge, PlayMode};
use yonokomae_engine::{App, EngineConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yonokomae_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env();
    tracing::info!(
        mode = %config.mode,
        fast_delays = config.fast_delays,
        fake_judgement = config.fake_judgement,
        "Starting Yono-Komae engine"
    );

    let mode = PlayMode::builtin()
        .into_iter()
        .find(|m| m.id == config.mode)
        .unwrap_or_else(|| PlayMode::new(config.mode.clone(), config.mode.clone()));
    let app = App::new(config);

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl-C received, cancelling");
            shutdown.cancel();
        }
    });

    let battle = app
        .use_cases
        .battles
        .generate(&mode, Some(&cancel))
        .await
        .with_context(|| format!("generating battle for mode '{}'", mode.id))?;

    let panel = app
        .use_cases
        .judges
        .determine_panel(&mode, &battle, &Judge::roster(), Some(&cancel))
        .await
        .with_context(|| format!("judging battle '{}'", battle.id))?;

    let output = serde_json::json!({
        "mode": mode.id,
        "battle": battle,
        "panel": panel,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
