use crate::image_classifier::interface::{Classification, ImageClassifierError};
use std::fmt;

pub const DEFAULT_PROMPT: &str = "Pick an image to classify";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationFailure {
    ConversionFailed,
    ModelLoadFailed(String),
    RequestFailed(String),
    Unclassified,
}

/// The one status line the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Prompt(String),
    Classified { label: String, percent: u8 },
    Failed(ClassificationFailure),
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayState::Prompt(prompt) => write!(f, "{}", prompt),
            DisplayState::Classified { label, percent } => {
                write!(f, "Classification: {} ({}%)", label, percent)
            }
            DisplayState::Failed(ClassificationFailure::ConversionFailed) => {
                write!(f, "Could not convert image.")
            }
            DisplayState::Failed(ClassificationFailure::ModelLoadFailed(reason)) => {
                write!(f, "Could not load model: {}", reason)
            }
            DisplayState::Failed(ClassificationFailure::RequestFailed(reason)) => {
                write!(f, "Could not perform classification request: {}", reason)
            }
            DisplayState::Failed(ClassificationFailure::Unclassified) => {
                write!(f, "Could not classify image.")
            }
        }
    }
}

/// Rounds half away from zero and clamps to 0..=100. `None` for NaN or infinity.
pub fn confidence_to_percent(confidence: f32) -> Option<u8> {
    if !confidence.is_finite() {
        return None;
    }

    let percent = (confidence as f64 * 100.0).round().clamp(0.0, 100.0);
    Some(percent as u8)
}

/// Reduces one classification outcome to what the user sees. Only the first
/// (highest confidence) entry counts.
pub fn resolve(result: Result<Vec<Classification>, ImageClassifierError>) -> DisplayState {
    match result {
        Ok(classifications) => match classifications.first() {
            Some(top) => match confidence_to_percent(top.confidence) {
                Some(percent) if !top.label.trim().is_empty() => DisplayState::Classified {
                    label: top.label.clone(),
                    percent,
                },
                _ => DisplayState::Failed(ClassificationFailure::Unclassified),
            },
            None => DisplayState::Failed(ClassificationFailure::Unclassified),
        },
        Err(ImageClassifierError::Conversion(_)) => {
            DisplayState::Failed(ClassificationFailure::ConversionFailed)
        }
        Err(ImageClassifierError::ModelLoad(reason)) => {
            DisplayState::Failed(ClassificationFailure::ModelLoadFailed(reason))
        }
        Err(ImageClassifierError::Request(reason)) => {
            DisplayState::Failed(ClassificationFailure::RequestFailed(reason))
        }
        Err(ImageClassifierError::MalformedOutput(_)) => {
            DisplayState::Failed(ClassificationFailure::Unclassified)
        }
    }
}
