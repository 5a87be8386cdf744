//! sdpanel — a client-side controller for a Stable Diffusion web interface.
//!
//! The crate mirrors the interaction contract of the generation page: a form
//! is submitted to `POST /generate`, the page shows a loading region while
//! the request (and the subsequent image load) is in flight, and exactly one
//! of the loading/result/error regions is visible at any instant. The page
//! elements live behind the [`view::PageView`] seam so the controller can be
//! exercised without a live document.

pub mod config;
pub mod controller;
pub mod error;
pub mod logger;
pub mod models;
pub mod service;
pub mod view;

pub use config::PanelConfig;
pub use controller::FormController;
pub use error::{PanelError, Result};
pub use models::{download_filename, FormData, GenerateResponse};
pub use service::{GenerationService, HttpGenerationService};
pub use view::{MemoryView, PageView, Region, ViewState};
