use classifier_app::main::ClassifierApp;
use clap::Parser;
use cli::Cli;
use config::Config;
use display::impl_console::StatusDisplayConsole;
use display::impl_gui::{run_window, StatusDisplayGui};
use image_classifier::interface::ImageClassifier;
use image_classifier::load::load_image_classifier;
use image_source::impl_channel::ImageSourceChannel;
use image_source::impl_paths::ImageSourcePaths;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

mod classifier_app;
mod cli;
mod config;
mod display;
mod image_classifier;
mod image_source;
mod library;

fn run_console(
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    images: Vec<PathBuf>,
) -> anyhow::Result<()> {
    let image_source = Arc::new(ImageSourcePaths::new(images, logger.clone()));
    let display = Arc::new(Mutex::new(StatusDisplayConsole::new()));

    let app = ClassifierApp::new(config.prompt, logger, image_source, image_classifier, display);

    app.run().map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}

fn run_gui(
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
) -> anyhow::Result<()> {
    let (image_source, picker) = ImageSourceChannel::new(logger.clone());
    let display = StatusDisplayGui::new();
    let window = display.window(picker);

    let app = ClassifierApp::new(
        config.prompt,
        logger.clone(),
        Arc::new(image_source),
        image_classifier,
        Arc::new(Mutex::new(display)),
    );

    std::thread::spawn(move || {
        if let Err(e) = app.run() {
            let _ = logger.info(&format!("Classifier stopped: {}", e));
        }
    });

    run_window(&config.window_title, window)
        .map_err(|e| anyhow::anyhow!("could not open window: {}", e))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_classifier = load_image_classifier(config.classifier, &config.model, logger.clone());

    if cli.images.is_empty() {
        run_gui(config, logger, image_classifier)
    } else {
        run_console(config, logger, image_classifier, cli.images)
    }
}
