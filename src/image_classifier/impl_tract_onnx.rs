use crate::image_classifier::interface::{Classification, ImageClassifier, ImageClassifierError};
use crate::image_classifier::labels::load_labels;
use crate::image_classifier::models::model_config::{ModelConfig, ModelOutput};
use crate::image_classifier::tract::image::resize_image_to_tensor;
use crate::image_classifier::tract::ranking::{flatten_scores, rank, softmax};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;
use std::time::Instant;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    labels: Vec<String>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger.with_namespace("classifier").with_namespace("tract");
        let (height, width) = config.input_shape;

        let labels = load_labels(&config.labels_path)?;

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)?
            .with_input_fact(
                0,
                f32::fact([1, 3, height as usize, width as usize]).into(),
            )?
            .into_optimized()?
            .into_runnable()?;

        logger.info(&format!(
            "Loaded {} with {} labels",
            config.onnx_model_path.display(),
            labels.len()
        ))?;

        Ok(Self {
            model,
            labels,
            config,
            logger,
        })
    }
}

/// Reads the first output as a score vector over `labels` and ranks it.
pub fn outputs_to_classifications(
    outputs: &[TValue],
    labels: &[String],
    config: &ModelConfig,
) -> Result<Vec<Classification>, ImageClassifierError> {
    let output = outputs
        .first()
        .ok_or_else(|| ImageClassifierError::MalformedOutput("model returned no outputs".into()))?
        .to_array_view::<f32>()
        .map_err(|e| ImageClassifierError::MalformedOutput(e.to_string()))?;

    let scores = flatten_scores(output.shape(), output.iter().cloned(), labels.len())
        .map_err(ImageClassifierError::MalformedOutput)?;

    let scores = match config.output {
        ModelOutput::Logits => softmax(&scores),
        ModelOutput::Probabilities => scores,
    };

    Ok(rank(&scores, labels, config.top_k))
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ImageClassifierError> {
        let started = Instant::now();

        let input = resize_image_to_tensor(image, &self.config)
            .map_err(|e| ImageClassifierError::Conversion(e.to_string()))?;

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ImageClassifierError::Request(e.to_string()))?;

        let classifications = outputs_to_classifications(&outputs, &self.labels, &self.config)?;

        let _ = self.logger.info(&format!(
            "Classified in {:?}: {:?}",
            started.elapsed(),
            classifications
        ));

        Ok(classifications)
    }
}
