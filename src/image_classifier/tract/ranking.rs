use crate::image_classifier::interface::Classification;
use std::cmp::Ordering;

/// Accepts `[1, N]` or `[N]` outputs where N is the label count, or the label
/// count plus a leading background class which is dropped.
pub fn flatten_scores(
    shape: &[usize],
    values: impl IntoIterator<Item = f32>,
    label_count: usize,
) -> Result<Vec<f32>, String> {
    let length = match shape {
        [n] | [1, n] => *n,
        _ => return Err(format!("expected a [1, N] score vector, got shape {:?}", shape)),
    };

    let skip = if length == label_count {
        0
    } else if length == label_count + 1 {
        1
    } else {
        return Err(format!(
            "model produced {} scores for {} labels",
            length, label_count
        ));
    };

    Ok(values.into_iter().skip(skip).take(label_count).collect())
}

pub fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();

    exps.iter().map(|e| e / sum).collect()
}

fn descending(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

pub fn rank(scores: &[f32], labels: &[String], top_k: usize) -> Vec<Classification> {
    let mut predictions: Vec<(usize, f32)> = scores.iter().cloned().enumerate().collect();

    predictions.sort_by(|a, b| descending(a.1, b.1));
    predictions.truncate(top_k);

    predictions
        .into_iter()
        .filter_map(|(class_idx, confidence)| {
            labels.get(class_idx).map(|label| Classification {
                label: label.clone(),
                confidence,
            })
        })
        .collect()
}
