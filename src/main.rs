mod app;
mod config;
mod state;
mod users;

use crate::config::LogFormat;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let app_state = state::AppState::init()?;

    let log = &app_state.config.log;
    match log.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(log.filter.as_str())
            .with_target(false)
            .json()
            .init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(log.filter.as_str())
            .init(),
    }

    let app = app::build_app(app_state.clone());
    app::serve(app, &app_state).await
}
