use crate::classifier_app::display_state::DEFAULT_PROMPT;
use crate::cli::Cli;
use crate::image_classifier::load::ClassifierKind;
use crate::image_classifier::models::model_config::ModelConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub prompt: String,
    pub window_title: String,
    pub logger_timezone: chrono::FixedOffset,
    pub classifier: ClassifierKind,
    pub model: ModelConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            window_title: "Photo Classifier".to_string(),
            logger_timezone: *chrono::Local::now().offset(),
            classifier: ClassifierKind::Tract,
            model: ModelConfig::default(),
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Config::default();

        config.classifier = cli.classifier.into();

        if let Some(model) = &cli.model {
            config.model.onnx_model_path = model.clone();
        }
        if let Some(labels) = &cli.labels {
            config.model.labels_path = labels.clone();
        }
        if let Some(top_k) = cli.top_k {
            config.model.top_k = top_k as usize;
        }
        if let Some(scaling) = cli.scaling {
            config.model.scaling = scaling.into();
        }
        if let Some(output) = cli.output {
            config.model.output = output.into();
        }
        if let Some(offset) = cli
            .utc_offset_hours
            .and_then(|hours| chrono::FixedOffset::east_opt(hours * 3600))
        {
            config.logger_timezone = offset;
        }

        config
    }
}
