use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::impl_unavailable::ImageClassifierUnavailable;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierKind {
    Tract,
    Fake,
}

/// Loads the model once for the whole process. A load failure does not stop
/// startup; every later request reports it instead.
pub fn load_image_classifier(
    kind: ClassifierKind,
    config: &ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn ImageClassifier + Send + Sync> {
    match kind {
        ClassifierKind::Fake => Arc::new(ImageClassifierFake::new(logger)),
        ClassifierKind::Tract => match ImageClassifierTractOnnx::new(config.clone(), logger.clone())
        {
            Ok(classifier) => Arc::new(classifier),
            Err(e) => {
                let _ = logger.info(&format!("Could not load model: {}", e));
                Arc::new(ImageClassifierUnavailable::new(e.to_string()))
            }
        },
    }
}
