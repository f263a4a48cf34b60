use crate::classifier_app::display_state::{resolve, ClassificationFailure, DisplayState};
use crate::image_classifier::interface::{Classification, ImageClassifierError};
use crate::image_source::interface::PickedImage;
use image::DynamicImage;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Picking,
    Classifying { image_name: String, started: Instant },
    Closed,
}

#[derive(Clone)]
pub struct State {
    pub phase: Phase,
    pub display: DisplayState,
    pub preview: Option<Arc<DynamicImage>>,
}

impl State {
    pub fn to_display_string(&self) -> String {
        let preview = match &self.preview {
            Some(image) => format!("{}x{}", image.width(), image.height()),
            None => "none".to_string(),
        };
        let phase = match &self.phase {
            Phase::Picking => "Picking".to_string(),
            Phase::Classifying {
                image_name,
                started,
            } => format!("Classifying({}, {:?})", image_name, started.elapsed()),
            Phase::Closed => "Closed".to_string(),
        };
        format!(
            "{} display={:?} preview={}",
            phase,
            self.display.to_string(),
            preview
        )
    }
}

#[derive(Debug)]
pub enum Event {
    ImagePicked(PickedImage),
    PickerClosed,
    ClassifyDone(Result<Vec<Classification>, ImageClassifierError>),
    /// The outstanding effect panicked instead of reporting back.
    EffectPanicked(String),
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::ImagePicked(picked) => match &picked.image {
                Ok(image) => format!(
                    "ImagePicked({}, {}x{})",
                    picked.name,
                    image.width(),
                    image.height()
                ),
                Err(e) => format!("ImagePicked({}, Err({}))", picked.name, e),
            },
            event => format!("{:?}", event),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Effect {
    OpenPicker,
    Classify { image: Arc<DynamicImage> },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::Classify { image } => {
                format!("Classify({}x{})", image.width(), image.height())
            }
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init(prompt: &str) -> (State, Vec<Effect>) {
    (
        State {
            phase: Phase::Picking,
            display: DisplayState::Prompt(prompt.to_string()),
            preview: None,
        },
        vec![Effect::OpenPicker],
    )
}

pub fn is_done(state: &State) -> bool {
    matches!(state.phase, Phase::Closed)
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state.phase.clone(), event) {
        (Phase::Picking, Event::ImagePicked(PickedImage { name, image })) => match image {
            Ok(image) => {
                let image = Arc::new(image);
                (
                    State {
                        phase: Phase::Classifying {
                            image_name: name,
                            started: Instant::now(),
                        },
                        preview: Some(image.clone()),
                        ..state
                    },
                    vec![Effect::Classify { image }],
                )
            }
            Err(_) => (
                State {
                    phase: Phase::Picking,
                    display: DisplayState::Failed(ClassificationFailure::ConversionFailed),
                    preview: None,
                },
                vec![Effect::OpenPicker],
            ),
        },
        (Phase::Picking, Event::PickerClosed) => (
            State {
                phase: Phase::Closed,
                ..state
            },
            vec![],
        ),
        (Phase::Classifying { .. }, Event::ClassifyDone(result)) => (
            State {
                phase: Phase::Picking,
                display: resolve(result),
                ..state
            },
            vec![Effect::OpenPicker],
        ),
        (Phase::Classifying { .. }, Event::EffectPanicked(message)) => (
            State {
                phase: Phase::Picking,
                display: DisplayState::Failed(ClassificationFailure::RequestFailed(message)),
                ..state
            },
            vec![Effect::OpenPicker],
        ),
        // a crashed picker cannot be reopened
        (Phase::Picking, Event::EffectPanicked(_)) => (
            State {
                phase: Phase::Closed,
                ..state
            },
            vec![],
        ),

        // Picks only arrive after OpenPicker and completions only after
        // Classify, anything else is stale.
        _ => (state, vec![]),
    }
}
