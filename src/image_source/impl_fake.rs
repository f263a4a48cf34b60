use crate::image_source::interface::{ImageSource, PickedImage};
use image::DynamicImage;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Hands out prepared picks, then closes.
pub struct ImageSourceFake {
    picks: Mutex<VecDeque<PickedImage>>,
}

impl ImageSourceFake {
    pub fn new(picks: Vec<PickedImage>) -> Self {
        Self {
            picks: Mutex::new(picks.into()),
        }
    }

    pub fn picked(name: &str, image: DynamicImage) -> PickedImage {
        PickedImage {
            name: name.to_string(),
            image: Ok(image),
        }
    }

    pub fn undecodable(name: &str) -> PickedImage {
        PickedImage {
            name: name.to_string(),
            image: Err("unsupported image format".into()),
        }
    }
}

impl ImageSource for ImageSourceFake {
    fn pick(&self) -> Option<PickedImage> {
        self.picks.lock().ok()?.pop_front()
    }
}
