//! NFT Neighbors mint terminal binary.

use lib_core::ChainConfig;
use std::time::Duration;
use terminal::ui::theme::Theme;
use terminal::ui::widgets::notifications::NotificationManager;
use terminal::utils::runtime::TOKIO_RT;
use terminal::App;

struct TerminalApp {
    app: App,
    notifications: NotificationManager,
}

impl eframe::App for TerminalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        terminal::ui::render(ctx, &mut self.app, &mut self.notifications);

        // Chain events arrive without user input, keep frames coming
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    terminal::debug::init();

    let config = ChainConfig::from_env()?;
    config.validate()?;
    tracing::info!(
        chain = %config.chain_name,
        chain_id = config.chain_id,
        wallet_rpc = %config.wallet_rpc_url,
        "Configuration loaded"
    );

    // Handlers spawn onto this runtime from the UI thread
    let _runtime = TOKIO_RT.enter();
    let app = App::new(&config)?;
    // Connect as soon as the window opens; the prompt stays for a retry
    app.handle_connect_click();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("NFT Neighbors")
            .with_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "NFT Neighbors",
        options,
        Box::new(move |cc| {
            Theme::default().apply(&cc.egui_ctx);
            Ok(Box::new(TerminalApp {
                app,
                notifications: NotificationManager::new(),
            }))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Window error: {e}"))?;

    tracing::info!("Window closed, shutting down");
    Ok(())
}
