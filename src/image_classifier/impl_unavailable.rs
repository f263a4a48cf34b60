use crate::image_classifier::interface::{Classification, ImageClassifier, ImageClassifierError};
use image::DynamicImage;

/// Takes the place of a model that failed to load at startup.
pub struct ImageClassifierUnavailable {
    reason: String,
}

impl ImageClassifierUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ImageClassifier for ImageClassifierUnavailable {
    fn classify(&self, _image: &DynamicImage) -> Result<Vec<Classification>, ImageClassifierError> {
        Err(ImageClassifierError::ModelLoad(self.reason.clone()))
    }
}
