use crate::classifier_app::core::{Phase, State};
use crate::display::interface::StatusDisplay;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Render {
    display: Arc<Mutex<dyn StatusDisplay + Send + Sync>>,
}

impl Render {
    pub fn new(display: Arc<Mutex<dyn StatusDisplay + Send + Sync>>) -> Self {
        Self { display }
    }

    pub fn render(&self, state: &State) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut display = self.display.lock().map_err(|e| e.to_string())?;

        display.set_busy(matches!(state.phase, Phase::Classifying { .. }))?;
        display.show_preview(state.preview.as_ref())?;
        display.show_status(&state.display)?;

        Ok(())
    }
}
