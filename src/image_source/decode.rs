use crate::image_source::interface::PickedImage;
use std::path::Path;

pub fn decode_image_file(path: &Path) -> PickedImage {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let image = image::open(path).map_err(|e| {
        Box::<dyn std::error::Error + Send + Sync>::from(format!("{}: {}", path.display(), e))
    });

    PickedImage { name, image }
}
