use crate::image_classifier::models::model_config::{ImageScaling, ModelConfig};
use image::{imageops, DynamicImage, RgbImage};
use tract_onnx::prelude::*;

pub fn letterbox_image(image: &DynamicImage, width: u32, height: u32) -> RgbImage {
    let (w, h) = (image.width() as f32, image.height() as f32);
    let scale = (width as f32 / w).min(height as f32 / h);
    let new_w = ((w * scale).round() as u32).clamp(1, width);
    let new_h = ((h * scale).round() as u32).clamp(1, height);

    let scaled = image
        .resize_exact(new_w, new_h, imageops::FilterType::Triangle)
        .to_rgb8();

    let mut padded = RgbImage::new(width, height);
    let x_offset = (width - new_w) / 2;
    let y_offset = (height - new_h) / 2;
    imageops::overlay(&mut padded, &scaled, x_offset as i64, y_offset as i64);

    padded
}

/// Takes the centred region of the source with the target's aspect ratio, then
/// resizes only that region. Thin strips never get upscaled as a whole.
pub fn center_crop_image(image: &DynamicImage, width: u32, height: u32) -> RgbImage {
    let (w, h) = (image.width() as u64, image.height() as u64);
    let (target_w, target_h) = (width as u64, height as u64);

    let (crop_w, crop_h) = if w * target_h > h * target_w {
        (((h * target_w + target_h / 2) / target_h).clamp(1, w), h)
    } else {
        (w, ((w * target_h + target_w / 2) / target_w).clamp(1, h))
    };
    let x_offset = (w - crop_w) / 2;
    let y_offset = (h - crop_h) / 2;

    image
        .crop_imm(
            x_offset as u32,
            y_offset as u32,
            crop_w as u32,
            crop_h as u32,
        )
        .resize_exact(width, height, imageops::FilterType::Triangle)
        .to_rgb8()
}

pub fn resize_image(
    image: &DynamicImage,
    width: u32,
    height: u32,
    scaling: ImageScaling,
) -> RgbImage {
    match scaling {
        ImageScaling::CenterCrop => center_crop_image(image, width, height),
        ImageScaling::Letterbox => letterbox_image(image, width, height),
        ImageScaling::Stretch => image
            .resize_exact(width, height, imageops::FilterType::Triangle)
            .to_rgb8(),
    }
}

/// NCHW `[1, 3, H, W]`, each channel normalised as `(p / 255 - mean) / std`.
fn image_to_tensor(rgb: &RgbImage, mean: [f32; 3], std: [f32; 3]) -> Tensor {
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        let pixel = rgb.get_pixel(x as u32, y as u32);
        (pixel[c] as f32 / 255.0 - mean[c]) / std[c]
    })
    .into_tensor()
}

pub fn resize_image_to_tensor(
    image: &DynamicImage,
    config: &ModelConfig,
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let (height, width) = config.input_shape;

    if image.width() == 0 || image.height() == 0 {
        return Err(format!("image has no pixels ({}x{})", image.width(), image.height()).into());
    }
    if width == 0 || height == 0 {
        return Err(format!("invalid model input shape {}x{}", width, height).into());
    }
    if config.std.iter().any(|s| *s == 0.0) {
        return Err("normalisation std must not be zero".into());
    }

    let resized = resize_image(image, width, height, config.scaling);

    Ok(image_to_tensor(&resized, config.mean, config.std))
}
