pub mod memory;

pub use memory::MemoryView;

use crate::models::FormData;

/// Element ids the host page must expose. Binding fails if any is absent.
pub const FORM_ID: &str = "generation-form";
pub const GENERATE_BTN_ID: &str = "generate-btn";
pub const LOADING_ID: &str = "loading";
pub const RESULT_ID: &str = "result";
pub const ERROR_ID: &str = "error";
pub const GENERATED_IMAGE_ID: &str = "generated-image";
pub const DOWNLOAD_BTN_ID: &str = "download-btn";
pub const NEW_GENERATION_BTN_ID: &str = "new-generation-btn";

pub const REQUIRED_ELEMENTS: [&str; 8] = [
    FORM_ID,
    GENERATE_BTN_ID,
    LOADING_ID,
    RESULT_ID,
    ERROR_ID,
    GENERATED_IMAGE_ID,
    DOWNLOAD_BTN_ID,
    NEW_GENERATION_BTN_ID,
];

/// The three toggleable view regions. Idle is the absence of all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Loading,
    Result,
    Error,
}

/// Overall view phase derived from region visibility.
///
/// `Mixed` is the forbidden more-than-one-visible condition; it never occurs
/// under the controller and exists so tests can detect a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Result,
    Error,
    Mixed,
}

/// The page surface the controller drives: the submit control, the three
/// regions, the image element, and the live form. Implementations hold the
/// bound elements; the controller never reaches into the document itself.
pub trait PageView {
    fn set_submit_enabled(&mut self, enabled: bool);
    fn submit_enabled(&self) -> bool;

    fn set_visible(&mut self, region: Region, visible: bool);
    fn visible(&self, region: Region) -> bool;

    fn set_image_source(&mut self, src: &str);
    /// Current source of the image element. Empty until the first
    /// successful generation.
    fn image_source(&self) -> String;

    /// Text shown inside the error region. The controller only ever writes
    /// a generic message here; specifics go to the log.
    fn set_error_detail(&mut self, message: &str);

    fn form(&self) -> &FormData;
    fn form_mut(&mut self) -> &mut FormData;
}

/// Derives the view phase from the visibility flags.
pub fn view_state(view: &dyn PageView) -> ViewState {
    let flags = [
        (ViewState::Loading, view.visible(Region::Loading)),
        (ViewState::Result, view.visible(Region::Result)),
        (ViewState::Error, view.visible(Region::Error)),
    ];
    let mut current = ViewState::Idle;
    for (state, visible) in flags {
        if visible {
            if current != ViewState::Idle {
                return ViewState::Mixed;
            }
            current = state;
        }
    }
    current
}
