use image::DynamicImage;

/// One pick from the picker. `image` is an error when the picked file could
/// not be decoded into a bitmap.
#[derive(Debug)]
pub struct PickedImage {
    pub name: String,
    pub image: Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>>,
}

pub trait ImageSource {
    /// Blocks until the user picks an image. `None` once the picker is closed
    /// for good.
    fn pick(&self) -> Option<PickedImage>;
}
