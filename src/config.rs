use std::env;
use std::path::{Path, PathBuf};

/// Where the panel points: the generation service's origin and the
/// directory downloaded images land in. Both optional; defaults match the
/// original deployment (service on localhost:8000, downloads to the
/// current directory).
#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub base_url: Option<String>,
    pub download_dir: Option<PathBuf>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            base_url: None,
            download_dir: None,
        }
    }
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let base_url = env::var("SDPANEL_BASE_URL").ok();
        let download_dir = env::var("SDPANEL_DOWNLOAD_DIR").ok().map(PathBuf::from);

        PanelConfig {
            base_url,
            download_dir,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_download_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.download_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| "http://127.0.0.1:8000".to_string())
    }

    pub fn download_dir(&self) -> PathBuf {
        self.download_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
