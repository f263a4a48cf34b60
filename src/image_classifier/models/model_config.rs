use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageScaling {
    /// Scale the short side to the target and crop the centre.
    CenterCrop,
    /// Scale to fit and pad the rest with black.
    Letterbox,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelOutput {
    Logits,
    Probabilities,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    pub labels_path: PathBuf,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub scaling: ImageScaling,
    pub mean: [f32; 3],
    pub std: [f32; 3],
    pub output: ModelOutput,
    pub top_k: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: PathBuf::from("models/mobilenetv2-7.onnx"),
            labels_path: PathBuf::from("models/synset.txt"),
            input_shape: (224, 224),
            scaling: ImageScaling::CenterCrop,
            mean: [0.485, 0.456, 0.406],
            std: [0.229, 0.224, 0.225],
            output: ModelOutput::Logits,
            top_k: 5,
        }
    }
}
