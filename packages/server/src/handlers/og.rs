use std::io::Cursor;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::image::thumb_key;

/// Social preview canvas dimensions.
const OG_WIDTH: u32 = 1200;
const OG_HEIGHT: u32 = 630;

/// Page background color, matching the public pages.
const BACKGROUND: Rgba<u8> = Rgba([248, 250, 252, 255]);

#[derive(Deserialize)]
pub struct OgQuery {
    pub permalink: String,
}

/// Compose the social preview image for an award: the badge thumbnail
/// centered on a fixed 1200x630 canvas.
#[instrument(skip(state, query), fields(permalink = %query.permalink))]
pub async fn og_image(
    State(state): State<AppState>,
    Query(query): Query<OgQuery>,
) -> Result<impl IntoResponse, AppError> {
    let details = super::award::find_award_details(&state.db, &query.permalink).await?;

    let thumb_bytes = state.storage.get(&thumb_key(&details.badge_slug)).await?;
    let thumb = image::load_from_memory(&thumb_bytes)
        .map_err(|e| AppError::Internal(format!("Thumbnail decode failed: {e}")))?;

    let png = compose(&thumb)?;

    Response::builder()
        .header(header::CONTENT_TYPE, "image/png")
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(png))
        .map_err(|e| AppError::Internal(e.to_string()))
}

fn compose(badge: &DynamicImage) -> Result<Vec<u8>, AppError> {
    let badge = badge.to_rgba8();
    let mut canvas = RgbaImage::from_pixel(OG_WIDTH, OG_HEIGHT, BACKGROUND);

    let x = i64::from(OG_WIDTH.saturating_sub(badge.width())) / 2;
    let y = i64::from(OG_HEIGHT.saturating_sub(badge.height())) / 2;
    image::imageops::overlay(&mut canvas, &badge, x, y);

    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(canvas)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| AppError::Internal(format!("Preview encode failed: {e}")))?;
    Ok(buf)
}
