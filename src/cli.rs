use crate::image_classifier::load::ClassifierKind;
use crate::image_classifier::models::model_config::{ImageScaling, ModelOutput};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "photo-classifier",
    version,
    about = "Pick a photo and see what the bundled MobileNetV2 model thinks it is"
)]
pub struct Cli {
    /// Images to classify one after another. Opens a window when none are given.
    pub images: Vec<PathBuf>,
    #[arg(long, help = "ONNX model file")]
    pub model: Option<PathBuf>,
    #[arg(long, help = "Label file, one label per model output")]
    pub labels: Option<PathBuf>,
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub top_k: Option<u16>,
    #[arg(long, value_enum)]
    pub scaling: Option<ScalingArg>,
    #[arg(long, value_enum)]
    pub output: Option<OutputArg>,
    #[arg(long, value_enum, default_value_t = ClassifierArg::Tract)]
    pub classifier: ClassifierArg,
    #[arg(long, allow_hyphen_values = true, help = "Timezone of log timestamps, hours east of UTC")]
    pub utc_offset_hours: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScalingArg {
    CenterCrop,
    Letterbox,
    Stretch,
}

impl From<ScalingArg> for ImageScaling {
    fn from(arg: ScalingArg) -> Self {
        match arg {
            ScalingArg::CenterCrop => ImageScaling::CenterCrop,
            ScalingArg::Letterbox => ImageScaling::Letterbox,
            ScalingArg::Stretch => ImageScaling::Stretch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Logits,
    Probabilities,
}

impl From<OutputArg> for ModelOutput {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Logits => ModelOutput::Logits,
            OutputArg::Probabilities => ModelOutput::Probabilities,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassifierArg {
    /// The ONNX model run with tract
    Tract,
    /// Deterministic stand-in that needs no model files
    Fake,
}

impl From<ClassifierArg> for ClassifierKind {
    fn from(arg: ClassifierArg) -> Self {
        match arg {
            ClassifierArg::Tract => ClassifierKind::Tract,
            ClassifierArg::Fake => ClassifierKind::Fake,
        }
    }
}
