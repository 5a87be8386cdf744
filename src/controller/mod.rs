use crate::{
    error::{PanelError, Result},
    models::{download_filename, FormData, INLINE_PNG_PREFIX},
    service::GenerationService,
    view::{PageView, Region},
};
use base64::Engine as _;
use chrono::Utc;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use uuid::Uuid;

/// Generic message shown in the error region. Specific causes go to the log.
const GENERIC_ERROR: &str = "Please try again.";

/// Drives the generation page: one submit pipeline, the download action,
/// and the reset action. Owns the view and the service client; the submit
/// control's enabled bit is the only concurrency control — while a
/// generation is in flight further submissions are ignored.
pub struct FormController<S, V> {
    service: S,
    view: V,
    download_dir: PathBuf,
}

impl<S: GenerationService, V: PageView> FormController<S, V> {
    pub fn new(service: S, view: V, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            service,
            view,
            download_dir: download_dir.into(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Submits the form and reveals the result once the image is actually
    /// renderable. Any failure along the pipeline lands in the error
    /// region with the submit control re-enabled; the typed cause is also
    /// returned so callers and tests can tell failures apart.
    pub async fn submit_and_render(&mut self) -> Result<()> {
        if !self.view.submit_enabled() {
            log::debug!("Submit ignored, a generation is already in flight");
            return Ok(());
        }

        let attempt = Uuid::new_v4();
        let started = Instant::now();

        self.view.set_submit_enabled(false);
        self.view.set_visible(Region::Loading, true);
        self.view.set_visible(Region::Result, false);
        self.view.set_visible(Region::Error, false);

        let form = self.view.form().clone();
        log::info!("Generating image (attempt {})", attempt);

        match self.run_pipeline(&form).await {
            Ok(source) => {
                self.view.set_image_source(&source);
                self.view.set_visible(Region::Loading, false);
                self.view.set_visible(Region::Result, true);
                self.view.set_submit_enabled(true);
                log::info!(
                    "Generation succeeded in {}ms (attempt {})",
                    started.elapsed().as_millis(),
                    attempt
                );
                Ok(())
            }
            Err(e) => {
                log::error!("Generation failed (attempt {}): {}", attempt, e);
                self.view.set_error_detail(GENERIC_ERROR);
                self.view.set_visible(Region::Loading, false);
                self.view.set_visible(Region::Error, true);
                self.view.set_submit_enabled(true);
                Err(e)
            }
        }
    }

    /// The two-stage pipeline: generation request, then image load. The
    /// result is the source string to display, only returned once the
    /// image behind it is known to be loadable.
    async fn run_pipeline(&self, form: &FormData) -> Result<String> {
        let response = self.service.generate(form).await?;
        let source = response.image_source();

        // Inline payloads arrive with the response; anything else must be
        // fetched before the result region is revealed.
        if !source.starts_with(INLINE_PNG_PREFIX) {
            self.service.load_image(&source).await?;
        }

        Ok(source)
    }

    /// Saves whatever the image element currently points at. No check that
    /// a generation happened first; an empty source fails downstream like
    /// any other unloadable source.
    pub async fn download_current_image(&self) -> Result<PathBuf> {
        let source = self.view.image_source();

        let bytes = match source.strip_prefix(INLINE_PNG_PREFIX) {
            Some(b64) => base64::engine::general_purpose::STANDARD
                .decode(b64)
                .map_err(|e| PanelError::Download(format!("Bad inline payload: {}", e)))?,
            None => self.service.load_image(&source).await?,
        };

        let path = self.download_dir.join(download_filename(Utc::now()));
        fs::write(&path, &bytes).map_err(|e| PanelError::Download(e.to_string()))?;
        log::info!("Image saved to: {}", path.display());
        Ok(path)
    }

    /// Hides the result region and restores the form's defaults. The error
    /// and loading regions are deliberately left alone.
    pub fn reset_view(&mut self) {
        self.view.set_visible(Region::Result, false);
        self.view.form_mut().reset();
        log::debug!("View reset for a new generation");
    }
}
