use sdpanel::{
    logger, FormController, FormData, HttpGenerationService, MemoryView, PageView, PanelConfig,
    PanelError, Result,
};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    logger::init_with_config(logger::LoggerConfig::development()).map_err(PanelError::Config)?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let config = PanelConfig::from_env();
    log::info!("🌐 Generation service: {}", config.base_url());
    log::info!("💾 Download directory: {}", config.download_dir().display());

    let prompt = env::args().nth(1).unwrap_or_else(|| {
        log::warn!("No prompt given, using a demo prompt");
        "A serene landscape with mountains and a lake at sunset, digital art style".to_string()
    });

    let mut form = FormData::stable_diffusion();
    form.set("prompt", &prompt);
    log::info!("📝 Prompt: {}", prompt);

    let view = MemoryView::new(form);
    let service = HttpGenerationService::new(&config)?;
    let mut controller = FormController::new(service, view, config.download_dir());

    log::info!("🔄 Submitting generation request...");
    match controller.submit_and_render().await {
        Ok(()) => {
            log::info!("✅ Generation succeeded!");
            log::info!("🖼️  Image source: {}", controller.view().image_source());

            match controller.download_current_image().await {
                Ok(path) => log::info!("💾 Image saved to: {}", path.display()),
                Err(e) => log::error!("❌ Failed to save image: {}", e),
            }
        }
        Err(e) => {
            log::error!("❌ Generation failed: {}", e);
            log::warn!(
                "💡 Is the generation service running at {}?",
                config.base_url()
            );
        }
    }

    controller.reset_view();
    log::info!("🎉 Done, view reset for the next generation");
    Ok(())
}
