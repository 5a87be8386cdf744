use crate::{
    error::{PanelError, Result},
    models::FormData,
    view::{PageView, Region, REQUIRED_ELEMENTS},
};

/// In-memory stand-in for the page: visibility flags, the submit control's
/// enabled bit, the image element's source, and the form itself. Used by the
/// demo binary and by the controller tests.
#[derive(Debug, Clone)]
pub struct MemoryView {
    form: FormData,
    submit_enabled: bool,
    loading_visible: bool,
    result_visible: bool,
    error_visible: bool,
    image_source: String,
    error_detail: String,
}

impl MemoryView {
    /// A view whose page exposes every required element, starting idle.
    pub fn new(form: FormData) -> Self {
        Self {
            form,
            submit_enabled: true,
            loading_visible: false,
            result_visible: false,
            error_visible: false,
            image_source: String::new(),
            error_detail: String::new(),
        }
    }

    /// Binds against the element ids a document actually exposes. Any
    /// missing required element is a fatal startup condition.
    pub fn bind(available: &[&str], form: FormData) -> Result<Self> {
        for id in REQUIRED_ELEMENTS {
            if !available.contains(&id) {
                return Err(PanelError::MissingElement(id));
            }
        }
        Ok(Self::new(form))
    }

    pub fn error_detail(&self) -> &str {
        &self.error_detail
    }
}

impl PageView for MemoryView {
    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    fn set_visible(&mut self, region: Region, visible: bool) {
        match region {
            Region::Loading => self.loading_visible = visible,
            Region::Result => self.result_visible = visible,
            Region::Error => self.error_visible = visible,
        }
    }

    fn visible(&self, region: Region) -> bool {
        match region {
            Region::Loading => self.loading_visible,
            Region::Result => self.result_visible,
            Region::Error => self.error_visible,
        }
    }

    fn set_image_source(&mut self, src: &str) {
        self.image_source = src.to_string();
    }

    fn image_source(&self) -> String {
        self.image_source.clone()
    }

    fn set_error_detail(&mut self, message: &str) {
        self.error_detail = message.to_string();
    }

    fn form(&self) -> &FormData {
        &self.form
    }

    fn form_mut(&mut self) -> &mut FormData {
        &mut self.form
    }
}
