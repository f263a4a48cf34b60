#[cfg(test)]
mod run_test {
    use crate::classifier_app::core::Phase;
    use crate::classifier_app::display_state::{DisplayState, DEFAULT_PROMPT};
    use crate::classifier_app::tests::fixture::Fixture;
    use crate::image_classifier::impl_fake::ImageClassifierFake;
    use crate::image_classifier::impl_unavailable::ImageClassifierUnavailable;
    use crate::image_classifier::interface::{
        Classification, ImageClassifier, ImageClassifierError,
    };
    use crate::image_source::impl_fake::ImageSourceFake;
    use image::DynamicImage;
    use std::sync::Arc;

    struct ImageClassifierPanicking;

    impl ImageClassifier for ImageClassifierPanicking {
        fn classify(
            &self,
            _image: &DynamicImage,
        ) -> Result<Vec<Classification>, ImageClassifierError> {
            panic!("inference crashed")
        }
    }

    fn cat_then_dog() -> Result<Vec<Classification>, ImageClassifierError> {
        Ok(vec![
            Classification {
                label: "cat".to_string(),
                confidence: 0.97,
            },
            Classification {
                label: "dog".to_string(),
                confidence: 0.02,
            },
        ])
    }

    #[test]
    fn test_run_classifies_each_pick_then_stops() {
        let logger = Fixture::logger();
        let f = Fixture::new(
            vec![
                ImageSourceFake::picked("cat.jpeg", Fixture::photo(64, 48)),
                ImageSourceFake::picked("cat2.jpeg", Fixture::photo(10, 10)),
            ],
            Arc::new(ImageClassifierFake::with_result(logger, cat_then_dog())),
        );

        let final_state = f.app.run().unwrap();

        assert_eq!(final_state.phase, Phase::Closed);
        assert_eq!(
            f.settled_statuses()
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>(),
            vec!["Classification: cat (97%)", "Classification: cat (97%)"]
        );
        assert_eq!(
            f.statuses().first(),
            Some(&DisplayState::Prompt(DEFAULT_PROMPT.to_string()))
        );
    }

    #[test]
    fn test_run_reports_every_failure_kind() {
        let logger = Fixture::logger();
        let f = Fixture::new(
            vec![
                ImageSourceFake::undecodable("broken.heic"),
                ImageSourceFake::picked("empty.png", DynamicImage::new_rgb8(0, 0)),
                ImageSourceFake::picked("cat.jpeg", Fixture::photo(16, 16)),
            ],
            Arc::new(ImageClassifierFake::with_result(logger, Ok(vec![]))),
        );

        f.app.run().unwrap();

        let statuses: Vec<String> = f.statuses().iter().map(|s| s.to_string()).collect();
        assert_eq!(
            statuses,
            vec![
                "Pick an image to classify",
                "Could not convert image.",
                "Could not classify image.",
            ]
        );
    }

    #[test]
    fn test_run_without_model_reports_load_failure() {
        let f = Fixture::new(
            vec![ImageSourceFake::picked("cat.jpeg", Fixture::photo(16, 16))],
            Arc::new(ImageClassifierUnavailable::new("no such file")),
        );

        let final_state = f.app.run().unwrap();

        assert_eq!(
            final_state.display.to_string(),
            "Could not load model: no such file"
        );
    }

    #[test]
    fn test_same_image_gives_same_display_state() {
        let logger = Fixture::logger();
        let f = Fixture::new(
            vec![
                ImageSourceFake::picked("first.png", Fixture::photo(33, 21)),
                ImageSourceFake::picked("again.png", Fixture::photo(33, 21)),
            ],
            Arc::new(ImageClassifierFake::new(logger)),
        );

        f.app.run().unwrap();

        let settled = f.settled_statuses();
        assert_eq!(settled.len(), 2);
        assert_eq!(settled[0], settled[1]);
        assert!(matches!(settled[0], DisplayState::Classified { .. }));
    }

    #[test]
    fn test_run_with_no_picks_keeps_prompt() {
        let f = Fixture::new(
            vec![],
            Arc::new(ImageClassifierUnavailable::new("unused")),
        );

        let final_state = f.app.run().unwrap();

        assert_eq!(final_state.phase, Phase::Closed);
        assert_eq!(
            f.statuses(),
            vec![DisplayState::Prompt(DEFAULT_PROMPT.to_string())]
        );
        assert!(f.settled_statuses().is_empty());
    }

    #[test]
    fn test_run_survives_a_panicking_classifier() {
        let f = Fixture::new(
            vec![
                ImageSourceFake::picked("cat.jpeg", Fixture::photo(16, 16)),
                ImageSourceFake::picked("dog.jpeg", Fixture::photo(8, 8)),
            ],
            Arc::new(ImageClassifierPanicking),
        );

        let final_state = f.app.run().unwrap();

        assert_eq!(final_state.phase, Phase::Closed);
        assert_eq!(
            f.settled_statuses()
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>(),
            vec![
                "Could not perform classification request: inference crashed",
                "Could not perform classification request: inference crashed",
            ]
        );
    }
}
