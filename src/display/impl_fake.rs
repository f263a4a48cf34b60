use crate::classifier_app::display_state::DisplayState;
use crate::display::interface::StatusDisplay;
use image::DynamicImage;
use std::error::Error;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub status: DisplayState,
    pub busy: bool,
    pub preview: Option<(u32, u32)>,
}

/// Records one frame per status write.
pub struct StatusDisplayFake {
    pub frames: Arc<Mutex<Vec<Frame>>>,
    busy: bool,
    preview: Option<(u32, u32)>,
}

impl StatusDisplayFake {
    pub fn new() -> Self {
        Self {
            frames: Arc::new(Mutex::new(Vec::new())),
            busy: false,
            preview: None,
        }
    }
}

impl StatusDisplay for StatusDisplayFake {
    fn show_status(&mut self, status: &DisplayState) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.frames
            .lock()
            .map_err(|e| e.to_string())?
            .push(Frame {
                status: status.clone(),
                busy: self.busy,
                preview: self.preview,
            });
        Ok(())
    }

    fn show_preview(
        &mut self,
        image: Option<&Arc<DynamicImage>>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.preview = image.map(|i| (i.width(), i.height()));
        Ok(())
    }

    fn set_busy(&mut self, busy: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.busy = busy;
        Ok(())
    }
}
