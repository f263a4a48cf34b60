use std::path::Path;

fn is_synset_id(token: &str) -> bool {
    token.len() == 9 && token.starts_with('n') && token[1..].chars().all(|c| c.is_ascii_digit())
}

/// `n01440764 tench, Tinca tinca` becomes `tench`.
fn parse_label(line: &str) -> String {
    let line = line.trim();
    let description = match line.split_once(char::is_whitespace) {
        Some((first, rest)) if is_synset_id(first) => rest.trim(),
        _ => line,
    };

    description
        .split(',')
        .next()
        .unwrap_or(description)
        .trim()
        .to_string()
}

pub fn parse_labels(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_label)
        .collect()
}

pub fn load_labels(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read labels {}: {}", path.display(), e))?;

    let labels = parse_labels(&text);
    if labels.is_empty() {
        return Err(format!("labels file {} is empty", path.display()).into());
    }

    Ok(labels)
}
