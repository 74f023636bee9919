use std::sync::Arc;

use anyhow::Context as _;
use council_desk::api::HttpFetcher;
use council_desk::config::Config;
use council_desk::gui::{ui_main, AppState};
use council_desk::loader::MountContext;
use eframe::egui;
use log::info;

fn main() -> anyhow::Result<()> {
    let config = Config::load().map_err(|e| anyhow::anyhow!("{e}"))?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    let runtime = tokio::runtime::Runtime::new().context("failed to start the tokio runtime")?;

    let mut fetcher = HttpFetcher::new(config.api.base_url.as_str());
    if let Some(token) = &config.api.token {
        fetcher = fetcher.with_token(token.as_str());
    }
    let mount_ctx = MountContext::new(Arc::new(fetcher), runtime.handle().clone());
    info!("Using backend at {}", config.api.base_url);

    let builder = egui::ViewportBuilder::default()
        .with_title("Council Desk")
        .with_inner_size(egui::vec2(config.window.width, config.window.height));

    let options = eframe::NativeOptions {
        viewport: builder,
        ..Default::default()
    };

    let backend_label = config.api.base_url.clone();
    let mut state: Option<AppState> = None;

    eframe::run_simple_native("Council Desk", options, move |ctx, _frame| {
        let state = state.get_or_insert_with(|| {
            ctx.set_visuals(egui::Visuals::light());
            let repaint_ctx = ctx.clone();
            let mount_ctx = mount_ctx
                .clone()
                .with_repaint(move || repaint_ctx.request_repaint());
            AppState::new(mount_ctx, backend_label.clone())
        });
        ui_main(ctx, state);
    })
    .map_err(|err| anyhow::anyhow!("UI exited with an error: {err}"))?;

    info!("Shutting down");
    Ok(())
}
