use crate::classifier_app::display_state::DisplayState;
use crate::display::interface::StatusDisplay;
use eframe::egui;
use image::DynamicImage;
use std::error::Error;
use std::path::PathBuf;
use std::sync::mpsc::{SyncSender, TrySendError};
use std::sync::{Arc, Mutex};

const PREVIEW_MAX_SIDE: u32 = 512;
const STILL_CLASSIFYING: &str = "Still classifying the previous image.";

#[derive(Default)]
struct Screen {
    status: String,
    busy: bool,
    preview: Option<Arc<DynamicImage>>,
    preview_version: u64,
    ctx: Option<egui::Context>,
}

impl Screen {
    fn request_repaint(&self) {
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}

pub struct ClassifierWindow {
    screen: Arc<Mutex<Screen>>,
    picker: SyncSender<PathBuf>,
    path_input: String,
    notice: Option<String>,
    texture: Option<egui::TextureHandle>,
    texture_version: u64,
}

impl ClassifierWindow {
    fn submit(&mut self, path: PathBuf) {
        self.notice = match self.picker.try_send(path) {
            Ok(()) => None,
            Err(TrySendError::Full(_)) => Some(STILL_CLASSIFYING.into()),
            Err(TrySendError::Disconnected(_)) => Some("The classifier has stopped.".into()),
        };
    }

    /// Drops are refused while a classification runs, like the button.
    fn drop_file(&mut self, path: PathBuf, busy: bool) {
        if busy {
            self.notice = Some(STILL_CLASSIFYING.into());
        } else {
            self.submit(path);
        }
    }

    /// The busy notice only lasts as long as the classification it refers to.
    fn track_busy(&mut self, busy: bool) {
        if !busy && self.notice.as_deref() == Some(STILL_CLASSIFYING) {
            self.notice = None;
        }
    }

    fn sync_texture(&mut self, ctx: &egui::Context, preview: Option<Arc<DynamicImage>>, version: u64) {
        if version == self.texture_version {
            return;
        }
        self.texture_version = version;

        self.texture = preview.map(|image| {
            let rgba = image.thumbnail(PREVIEW_MAX_SIDE, PREVIEW_MAX_SIDE).to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
            ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR)
        });
    }
}

impl eframe::App for ClassifierWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (status, busy, preview, version) = match self.screen.lock() {
            Ok(mut screen) => {
                if screen.ctx.is_none() {
                    screen.ctx = Some(ctx.clone());
                }
                (
                    screen.status.clone(),
                    screen.busy,
                    screen.preview.clone(),
                    screen.preview_version,
                )
            }
            Err(_) => return,
        };

        self.track_busy(busy);
        self.sync_texture(ctx, preview, version);

        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .find_map(|file| file.path.clone())
        });
        if let Some(path) = dropped {
            self.drop_file(path, busy);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.label(egui::RichText::new(&status).size(24.0));

                if let Some(texture) = &self.texture {
                    ui.add_space(8.0);
                    ui.add(egui::Image::new(texture).max_height(300.0));
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut self.path_input)
                        .on_hover_text("Path of an image file, or drop one onto the window");

                    let pick = ui.add_enabled(
                        !busy && !self.path_input.trim().is_empty(),
                        egui::Button::new("Pick an Image"),
                    );
                    if pick.clicked() {
                        let path = PathBuf::from(self.path_input.trim());
                        self.submit(path);
                    }
                });

                if busy {
                    ui.spinner();
                }
                if let Some(notice) = &self.notice {
                    ui.label(notice.as_str());
                }
            });
        });
    }
}

pub struct StatusDisplayGui {
    screen: Arc<Mutex<Screen>>,
}

impl StatusDisplayGui {
    pub fn new() -> Self {
        Self {
            screen: Arc::new(Mutex::new(Screen::default())),
        }
    }

    /// The window reading this display. Paths picked in it go to `picker`.
    pub fn window(&self, picker: SyncSender<PathBuf>) -> ClassifierWindow {
        ClassifierWindow {
            screen: self.screen.clone(),
            picker,
            path_input: String::new(),
            notice: None,
            texture: None,
            texture_version: 0,
        }
    }
}

/// Blocks the calling thread until the window is closed.
pub fn run_window(title: &str, window: ClassifierWindow) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([520.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(title, options, Box::new(|_cc| Box::new(window)))
}

impl StatusDisplay for StatusDisplayGui {
    fn show_status(&mut self, status: &DisplayState) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut screen = self.screen.lock().map_err(|e| e.to_string())?;
        screen.status = status.to_string();
        screen.request_repaint();
        Ok(())
    }

    fn show_preview(
        &mut self,
        image: Option<&Arc<DynamicImage>>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut screen = self.screen.lock().map_err(|e| e.to_string())?;

        let unchanged = match (&screen.preview, image) {
            (Some(current), Some(next)) => Arc::ptr_eq(current, next),
            (None, None) => true,
            _ => false,
        };
        if !unchanged {
            screen.preview = image.cloned();
            screen.preview_version += 1;
            screen.request_repaint();
        }
        Ok(())
    }

    fn set_busy(&mut self, busy: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut screen = self.screen.lock().map_err(|e| e.to_string())?;
        screen.busy = busy;
        screen.request_repaint();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::sync_channel;

    #[test]
    fn test_preview_version_only_moves_on_new_image() {
        let mut display = StatusDisplayGui::new();
        let image = Arc::new(DynamicImage::new_rgb8(2, 2));

        display.show_preview(Some(&image)).unwrap();
        display.show_preview(Some(&image)).unwrap();
        assert_eq!(display.screen.lock().unwrap().preview_version, 1);

        display.show_preview(None).unwrap();
        assert_eq!(display.screen.lock().unwrap().preview_version, 2);
    }

    #[test]
    fn test_window_refuses_a_second_pending_pick() {
        let display = StatusDisplayGui::new();
        let (sender, receiver) = sync_channel(1);
        let mut window = display.window(sender);

        window.submit(PathBuf::from("a.png"));
        assert!(window.notice.is_none());

        window.submit(PathBuf::from("b.png"));
        assert_eq!(
            window.notice.as_deref(),
            Some(STILL_CLASSIFYING)
        );

        assert_eq!(receiver.recv().unwrap(), PathBuf::from("a.png"));
    }

    #[test]
    fn test_window_ignores_drops_while_busy() {
        let display = StatusDisplayGui::new();
        let (sender, receiver) = sync_channel(1);
        let mut window = display.window(sender);

        window.drop_file(PathBuf::from("dropped.png"), true);

        assert!(receiver.try_recv().is_err());
        assert_eq!(window.notice.as_deref(), Some(STILL_CLASSIFYING));

        window.drop_file(PathBuf::from("dropped.png"), false);

        assert_eq!(receiver.try_recv().unwrap(), PathBuf::from("dropped.png"));
        assert!(window.notice.is_none());
    }

    #[test]
    fn test_notice_clears_when_classification_finishes() {
        let display = StatusDisplayGui::new();
        let (sender, _receiver) = sync_channel(1);
        let mut window = display.window(sender);

        window.track_busy(true);
        window.drop_file(PathBuf::from("dropped.png"), true);
        window.track_busy(true);
        assert_eq!(window.notice.as_deref(), Some(STILL_CLASSIFYING));

        window.track_busy(false);
        assert!(window.notice.is_none());
    }

    #[test]
    fn test_status_text_is_rendered_display_state() {
        let mut display = StatusDisplayGui::new();

        display
            .show_status(&DisplayState::Prompt("Pick an image to classify".into()))
            .unwrap();

        assert_eq!(
            display.screen.lock().unwrap().status,
            "Pick an image to classify"
        );
    }
}
