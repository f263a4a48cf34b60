use crate::image_classifier::interface::{Classification, ImageClassifier, ImageClassifierError};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::resize_image_to_tensor;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

const OBJECTS: [&str; 18] = [
    "dog", "cat", "person", "car", "chair", "table", "bird", "tree", "bicycle", "book", "laptop",
    "phone", "cup", "bottle", "keyboard", "mouse", "plant", "clock",
];

/// Classifier without a model. Results are drawn from an rng seeded with the
/// converted pixels, so the same image always gets the same answer.
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    config: ModelConfig,
    scripted: Option<Result<Vec<Classification>, ImageClassifierError>>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("classifier").with_namespace("fake"),
            config: ModelConfig {
                input_shape: (32, 32),
                ..ModelConfig::default()
            },
            scripted: None,
        }
    }

    /// Answers every convertible image with `result`.
    #[cfg(test)]
    pub fn with_result(
        logger: Arc<dyn Logger + Send + Sync>,
        result: Result<Vec<Classification>, ImageClassifierError>,
    ) -> Self {
        Self {
            scripted: Some(result),
            ..Self::new(logger)
        }
    }

    fn seed(pixels: &[f32]) -> u64 {
        pixels.iter().fold(0xcbf2_9ce4_8422_2325u64, |hash, value| {
            (hash ^ value.to_bits() as u64).wrapping_mul(0x0100_0000_01b3)
        })
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ImageClassifierError> {
        let _ = self.logger.info("Classifying image with fake classifier...");

        let input = resize_image_to_tensor(image, &self.config)
            .map_err(|e| ImageClassifierError::Conversion(e.to_string()))?;

        if let Some(result) = &self.scripted {
            return result.clone();
        }

        let pixels = input
            .as_slice::<f32>()
            .map_err(|e| ImageClassifierError::Request(e.to_string()))?;
        let mut rng = StdRng::seed_from_u64(Self::seed(pixels));

        let mut classifications: Vec<Classification> = (0..3)
            .map(|_| Classification {
                label: OBJECTS[rng.random_range(0..OBJECTS.len())].to_string(),
                confidence: rng.random_range(0.0..1.0),
            })
            .collect();
        classifications.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        Ok(classifications)
    }
}
