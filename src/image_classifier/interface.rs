use image::DynamicImage;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

/// Why a single classification produced no result.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageClassifierError {
    /// The image could not be turned into the model's input tensor.
    Conversion(String),
    /// The model never loaded; every request reports why.
    ModelLoad(String),
    /// Running the inference request itself failed.
    Request(String),
    /// The model answered with something that is not a score vector.
    MalformedOutput(String),
}

impl fmt::Display for ImageClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageClassifierError::Conversion(reason) => {
                write!(f, "image conversion failed: {}", reason)
            }
            ImageClassifierError::ModelLoad(reason) => write!(f, "model not loaded: {}", reason),
            ImageClassifierError::Request(reason) => {
                write!(f, "classification request failed: {}", reason)
            }
            ImageClassifierError::MalformedOutput(reason) => {
                write!(f, "unexpected model output: {}", reason)
            }
        }
    }
}

impl std::error::Error for ImageClassifierError {}

pub trait ImageClassifier {
    /// Returns classifications ordered by descending confidence.
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ImageClassifierError>;
}
