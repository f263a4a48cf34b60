use crate::classifier_app::core::{init, is_done, transition, Effect, Event, State};
use crate::classifier_app::render::Render;
use crate::classifier_app::run_effect::RunEffect;
use crate::display::interface::StatusDisplay;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_source::interface::ImageSource;
use crate::library::logger::interface::Logger;
use crate::library::state_machine::StateMachine;
use std::sync::mpsc::SyncSender;
use std::sync::{Arc, Mutex};

/// Wires the pure core to the picker, the shared model and the display. Runs
/// until the picker closes.
#[derive(Clone)]
pub struct ClassifierApp {
    pub prompt: String,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub image_source: Arc<dyn ImageSource + Send + Sync>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub display: Arc<Mutex<dyn StatusDisplay + Send + Sync>>,
}

impl ClassifierApp {
    pub fn new(
        prompt: String,
        logger: Arc<dyn Logger + Send + Sync>,
        image_source: Arc<dyn ImageSource + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        display: Arc<Mutex<dyn StatusDisplay + Send + Sync>>,
    ) -> Self {
        Self {
            prompt,
            logger: logger.with_namespace("classifier_app"),
            image_source,
            image_classifier,
            display,
        }
    }

    pub fn run(&self) -> Result<State, Box<dyn std::error::Error + Send + Sync>> {
        let render = Render::new(self.display.clone());
        let run_effect = RunEffect::new(
            self.logger.clone(),
            self.image_source.clone(),
            self.image_classifier.clone(),
        );
        let transition_logger = self.logger.clone();
        let render_logger = self.logger.clone();

        let machine = StateMachine::new(
            init(&self.prompt),
            move |state: State, event: Event| {
                let _ = transition_logger.info(&format!(
                    "\nold state:\n\t{}\n\nevent:\n\t{}",
                    state.to_display_string(),
                    event.to_display_string()
                ));
                let (new_state, effects) = transition(state, event);
                let _ = transition_logger.info(&format!(
                    "\nnew state:\n\t{}\n\neffects:\n\t{:?}",
                    new_state.to_display_string(),
                    effects
                        .iter()
                        .map(|e| e.to_display_string())
                        .collect::<Vec<_>>()
                ));
                (new_state, effects)
            },
            move |state: &State| {
                if let Err(e) = render.render(state) {
                    let _ = render_logger.info(&format!("Render failed: {}", e));
                }
            },
            move |effect: Effect, event_sender: SyncSender<Event>| {
                run_effect.run_effect(effect, event_sender)
            },
            is_done,
        )
        .on_effect_panic(Event::EffectPanicked);

        machine.run()
    }
}
