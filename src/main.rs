use anyhow::{Context, Result};
use flowboard::{
    config::Config,
    fetch::{sheet_csv_url, HttpSource},
    refresh::{Controller, Refresher},
    render::SharedPage,
    server,
};
use std::{env, sync::Arc};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .init();
    info!("startup");

    // ─── 2) config ───────────────────────────────────────────────────
    let cfg = Config::from_env().context("loading configuration")?;
    let url = sheet_csv_url(&cfg.sheet_id, &cfg.sheet_name).context("building sheet URL")?;
    info!(url = %url, period_secs = cfg.refresh_period.as_secs(), "configured");

    // ─── 3) refresh loop ─────────────────────────────────────────────
    let source = HttpSource::with_timeout(url, cfg.fetch_timeout).context("building HTTP client")?;
    let page = SharedPage::new();
    let mut controller = Controller::new(Refresher::new(source, page));
    controller.start(cfg.refresh_period);

    // ─── 4) serve ────────────────────────────────────────────────────
    let routes = server::routes(Arc::clone(controller.refresher()), cfg.refresh_period);
    info!("Server starting on port {}", cfg.port);
    info!("Page: http://localhost:{}/", cfg.port);

    tokio::select! {
        _ = warp::serve(routes).run(([0, 0, 0, 0], cfg.port)) => {}
        res = tokio::signal::ctrl_c() => {
            res.context("waiting for ctrl-c")?;
            info!("shutdown requested");
        }
    }

    controller.stop();
    info!("all done");
    Ok(())
}
