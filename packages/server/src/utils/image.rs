use std::io::Cursor;

use common::storage::BlobStore;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use tracing::instrument;

use crate::error::AppError;

/// Side of the full-size badge asset.
pub const FULL_SIZE: u32 = 1024;
/// Side of the thumbnail asset.
pub const THUMB_SIZE: u32 = 512;

/// Storage key for a badge's full-size PNG.
pub fn full_key(slug: &str) -> String {
    format!("badges/{slug}/full.png")
}

/// Storage key for a badge's WebP thumbnail.
pub fn thumb_key(slug: &str) -> String {
    format!("badges/{slug}/thumb.webp")
}

/// Public URLs of the two stored badge assets.
pub struct StoredBadgeAssets {
    pub image_url: String,
    pub thumb_url: String,
}

/// Fetch a generated image, derive the two fixed-resolution assets, and
/// persist them under the badge slug. Fetch or decode failure is fatal to the
/// request; a partially written pair is not cleaned up.
#[instrument(skip(http, store), fields(slug))]
pub async fn process_and_store(
    http: &reqwest::Client,
    store: &dyn BlobStore,
    image_url: &str,
    slug: &str,
) -> Result<StoredBadgeAssets, AppError> {
    let response = http
        .get(image_url)
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("Image fetch failed: {e}")))?;
    if !response.status().is_success() {
        return Err(AppError::Upstream(format!(
            "Image fetch returned {}",
            response.status()
        )));
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Upstream(format!("Image fetch failed: {e}")))?;

    let source = image::load_from_memory(&bytes)
        .map_err(|e| AppError::Upstream(format!("Image decode failed: {e}")))?;

    let full_png = encode_padded(&source, FULL_SIZE, ImageFormat::Png)?;
    let thumb_webp = encode_padded(&source, THUMB_SIZE, ImageFormat::WebP)?;

    let image_url = store
        .put(&full_key(slug), &full_png, "image/png")
        .await?;
    let thumb_url = store
        .put(&thumb_key(slug), &thumb_webp, "image/webp")
        .await?;

    Ok(StoredBadgeAssets {
        image_url,
        thumb_url,
    })
}

/// Contain-fit the source onto a square transparent canvas of the given side
/// and encode it in the given format.
fn encode_padded(source: &DynamicImage, side: u32, format: ImageFormat) -> Result<Vec<u8>, AppError> {
    let padded = pad_to_square(source, side);
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(padded)
        .write_to(&mut Cursor::new(&mut buf), format)
        .map_err(|e| AppError::Internal(format!("Image encode failed: {e}")))?;
    Ok(buf)
}

/// Aspect-preserving resize centered on a transparent square canvas.
fn pad_to_square(source: &DynamicImage, side: u32) -> RgbaImage {
    let resized = source.resize(side, side, FilterType::Lanczos3).to_rgba8();
    let mut canvas = RgbaImage::from_pixel(side, side, Rgba([255, 255, 255, 0]));
    let x = (side - resized.width()) / 2;
    let y = (side - resized.height()) / 2;
    image::imageops::overlay(&mut canvas, &resized, i64::from(x), i64::from(y));
    canvas
}
