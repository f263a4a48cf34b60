use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::impl_unavailable::ImageClassifierUnavailable;
use crate::image_classifier::interface::{Classification, ImageClassifier, ImageClassifierError};
use crate::image_classifier::load::{load_image_classifier, ClassifierKind};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::test::fixture::Fixture;
use image::DynamicImage;
use std::path::PathBuf;

#[test]
fn test_fake_classifier_is_deterministic_per_image() {
    let f = Fixture::new();
    let image = Fixture::gradient_image(64, 48);

    let first = f.image_classifier.classify(&image).unwrap();
    let second = f.image_classifier.classify(&image).unwrap();

    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_fake_classifier_orders_by_descending_confidence() {
    let f = Fixture::new();

    let results = f
        .image_classifier
        .classify(&Fixture::gradient_image(20, 20))
        .unwrap();

    for pair in results.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
    for c in &results {
        assert!((0.0..1.0).contains(&c.confidence));
    }
}

#[test]
fn test_fake_classifier_reports_conversion_failure() {
    let f = Fixture::new();

    let result = f.image_classifier.classify(&DynamicImage::new_rgb8(0, 10));

    assert!(matches!(result, Err(ImageClassifierError::Conversion(_))));
}

#[test]
fn test_scripted_classifier_returns_script_for_convertible_images() {
    let f = Fixture::new();
    let script = vec![Classification {
        label: "cat".to_string(),
        confidence: 0.97,
    }];
    let classifier = ImageClassifierFake::with_result(f.logger.clone(), Ok(script.clone()));

    assert_eq!(
        classifier.classify(&Fixture::gradient_image(8, 8)),
        Ok(script)
    );
    assert!(matches!(
        classifier.classify(&DynamicImage::new_rgb8(8, 0)),
        Err(ImageClassifierError::Conversion(_))
    ));
}

#[test]
fn test_unavailable_classifier_reports_model_load_failure() {
    let classifier = ImageClassifierUnavailable::new("file not found");

    assert_eq!(
        classifier.classify(&Fixture::gradient_image(8, 8)),
        Err(ImageClassifierError::ModelLoad("file not found".to_string()))
    );
}

#[test]
fn test_loading_missing_model_yields_unavailable_classifier() {
    let f = Fixture::new();
    let config = ModelConfig {
        onnx_model_path: PathBuf::from("does/not/exist/model.onnx"),
        labels_path: PathBuf::from("does/not/exist/synset.txt"),
        ..ModelConfig::default()
    };

    let classifier = load_image_classifier(ClassifierKind::Tract, &config, f.logger.clone());

    match classifier.classify(&Fixture::gradient_image(8, 8)) {
        Err(ImageClassifierError::ModelLoad(reason)) => {
            assert!(reason.contains("does/not/exist/synset.txt"));
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_error_descriptions() {
    assert_eq!(
        ImageClassifierError::Request("backend crashed".to_string()).to_string(),
        "classification request failed: backend crashed"
    );
    assert_eq!(
        ImageClassifierError::Conversion("image has no pixels (0x0)".to_string()).to_string(),
        "image conversion failed: image has no pixels (0x0)"
    );
}
