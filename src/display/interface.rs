use crate::classifier_app::display_state::DisplayState;
use image::DynamicImage;
use std::error::Error;
use std::sync::Arc;

/// Where the status line and the picked image are presented. Only the
/// classifier loop writes to it.
pub trait StatusDisplay: Send + Sync {
    /// Replace the status line
    fn show_status(&mut self, status: &DisplayState) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Show the picked image, or nothing
    fn show_preview(
        &mut self,
        image: Option<&Arc<DynamicImage>>,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Whether a classification is in flight; pickers are disabled meanwhile
    fn set_busy(&mut self, busy: bool) -> Result<(), Box<dyn Error + Send + Sync>>;
}
