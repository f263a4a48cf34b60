use crate::image_source::decode::decode_image_file;
use crate::image_source::interface::{ImageSource, PickedImage};
use crate::library::logger::interface::Logger;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Picks the given files in order, then closes.
pub struct ImageSourcePaths {
    paths: Mutex<VecDeque<PathBuf>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageSourcePaths {
    pub fn new(paths: Vec<PathBuf>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            paths: Mutex::new(paths.into()),
            logger: logger.with_namespace("image_source").with_namespace("paths"),
        }
    }
}

impl ImageSource for ImageSourcePaths {
    fn pick(&self) -> Option<PickedImage> {
        let path = self.paths.lock().ok()?.pop_front()?;
        let _ = self.logger.info(&format!("Picked {}", path.display()));

        Some(decode_image_file(&path))
    }
}
