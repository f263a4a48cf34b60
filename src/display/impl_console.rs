use crate::classifier_app::display_state::DisplayState;
use crate::display::interface::StatusDisplay;
use image::DynamicImage;
use std::error::Error;
use std::sync::Arc;

pub struct StatusDisplayConsole {
    status: String,
    busy: bool,
    preview: Option<Arc<DynamicImage>>,
    rendered: Option<(String, bool)>,
}

impl StatusDisplayConsole {
    pub fn new() -> Self {
        Self {
            status: String::new(),
            busy: false,
            preview: None,
            rendered: None,
        }
    }

    fn frame(&self) -> Vec<String> {
        let mut lines = vec![self.status.clone()];
        if let Some(image) = &self.preview {
            lines.push(format!("image {}x{}", image.width(), image.height()));
        }
        if self.busy {
            lines.push("classifying...".to_string());
        }

        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let border = "─".repeat(width + 2);

        let mut frame = vec![format!("┌{}┐", border)];
        for line in lines {
            let padding = width - line.chars().count();
            frame.push(format!("│ {}{} │", line, " ".repeat(padding)));
        }
        frame.push(format!("└{}┘", border));
        frame
    }

    fn render_display(&mut self) {
        let current = (self.status.clone(), self.busy);
        if self.rendered.as_ref() == Some(&current) {
            return;
        }
        self.rendered = Some(current);

        for line in self.frame() {
            println!("{}", line);
        }
    }
}

impl StatusDisplay for StatusDisplayConsole {
    fn show_status(&mut self, status: &DisplayState) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.status = status.to_string();
        self.render_display();
        Ok(())
    }

    fn show_preview(
        &mut self,
        image: Option<&Arc<DynamicImage>>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.preview = image.cloned();
        Ok(())
    }

    fn set_busy(&mut self, busy: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.busy = busy;
        Ok(())
    }
}
