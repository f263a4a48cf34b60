use crate::image_source::decode::decode_image_file;
use crate::image_source::interface::{ImageSource, PickedImage};
use crate::library::logger::interface::Logger;
use std::path::PathBuf;
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::sync::{Arc, Mutex};

/// Picks whatever path the window submits. The slot holds a single path, so a
/// submission while one is still pending is refused rather than queued.
pub struct ImageSourceChannel {
    receiver: Mutex<Receiver<PathBuf>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageSourceChannel {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> (Self, SyncSender<PathBuf>) {
        let (sender, receiver) = sync_channel(1);
        let source = Self {
            receiver: Mutex::new(receiver),
            logger: logger.with_namespace("image_source").with_namespace("channel"),
        };
        (source, sender)
    }
}

impl ImageSource for ImageSourceChannel {
    fn pick(&self) -> Option<PickedImage> {
        let path = self.receiver.lock().ok()?.recv().ok()?;
        let _ = self.logger.info(&format!("Picked {}", path.display()));

        Some(decode_image_file(&path))
    }
}
