use crate::classifier_app::core::{Effect, Event};
use crate::image_classifier::interface::ImageClassifier;
use crate::image_source::interface::ImageSource;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::SyncSender;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    image_source: Arc<dyn ImageSource + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        image_source: Arc<dyn ImageSource + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        Self {
            logger,
            image_source,
            image_classifier,
        }
    }

    pub fn run_effect(&self, effect: Effect, event_sender: SyncSender<Event>) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::OpenPicker => {
                let event = match self.image_source.pick() {
                    Some(picked) => Event::ImagePicked(picked),
                    None => Event::PickerClosed,
                };
                let _ = event_sender.send(event);
            }
            Effect::Classify { image } => {
                let started = Instant::now();
                let result = self.image_classifier.classify(&image);
                let _ = self.logger.info(&format!(
                    "Classification finished in {:?}",
                    started.elapsed()
                ));
                let _ = event_sender.send(Event::ClassifyDone(result));
            }
        }
    }
}
