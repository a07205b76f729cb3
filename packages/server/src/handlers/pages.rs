use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use tracing::instrument;

use crate::error::AppError;
use crate::models::award::{AwardDetails, AwardListItem};
use crate::state::AppState;

/// Serve a stored badge asset (`/badges/{slug}/{file}`). Path segments cannot
/// contain slashes, and the storage layer rejects dot segments, so traversal
/// out of the badges prefix is not possible.
#[instrument(skip(state))]
pub async fn badge_asset(
    State(state): State<AppState>,
    Path((slug, file)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("badges/{slug}/{file}");
    let content = state.storage.get(&key).await?;

    let mime = mime_guess::from_path(&file).first_or_octet_stream();

    Response::builder()
        .header(header::CONTENT_TYPE, mime.as_ref())
        // Assets are written once per slug and never rewritten.
        .header(header::CACHE_CONTROL, "public, max-age=31536000, immutable")
        .body(Body::from(content))
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Public award page (`/a/{permalink}`).
#[instrument(skip(state))]
pub async fn award_page(
    State(state): State<AppState>,
    Path(permalink): Path<String>,
) -> Result<Html<String>, AppError> {
    let details = super::award::find_award_details(&state.db, &permalink).await?;
    let base = state.config.server.public_base_url.trim_end_matches('/');
    Ok(Html(render_award_page(&details, base)))
}

/// Public hall-of-fame page (`/hof`).
#[instrument(skip(state))]
pub async fn hof_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let items = super::award::list_award_items(&state.db).await?;
    Ok(Html(render_hof_page(&items)))
}

fn render_award_page(details: &AwardDetails, base: &str) -> String {
    let title = format!(
        "{} \u{2014} {}",
        escape(&details.badge_name),
        escape(&details.person_name)
    );
    let og_image = format!("{base}/api/og?permalink={}", details.public_permalink);
    let page_url = format!("{base}/a/{}", details.public_permalink);

    let handle = details
        .person_handle
        .as_deref()
        .map(|h| format!("<span class=\"handle\">{}</span>", escape(h)))
        .unwrap_or_default();
    let person_title = details
        .person_title
        .as_deref()
        .map(|t| format!("<p class=\"title\">{}</p>", escape(t)))
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta property="og:title" content="{title}">
<meta property="og:description" content="{citation}">
<meta property="og:image" content="{og_image}">
<meta property="og:url" content="{page_url}">
<meta property="og:type" content="website">
<meta name="twitter:card" content="summary_large_image">
<style>
body {{ font-family: system-ui, sans-serif; background: #F8FAFC; color: #0F172A;
       display: flex; justify-content: center; padding: 3rem 1rem; }}
.card {{ max-width: 36rem; text-align: center; }}
.badge {{ width: 16rem; height: 16rem; object-fit: contain; }}
.citation {{ font-style: italic; color: #334155; }}
.project {{ color: #475569; }}
.handle {{ color: #64748B; margin-left: 0.5rem; }}
footer {{ margin-top: 2rem; font-size: 0.8rem; color: #94A3B8; }}
</style>
</head>
<body>
<div class="card">
<img class="badge" src="{image}" alt="{badge_name} badge">
<h1>{badge_name}</h1>
<h2>{person_name}{handle}</h2>
{person_title}
<p class="citation">&ldquo;{citation}&rdquo;</p>
<p class="project">For <strong>{project_name}</strong>: {project_desc}</p>
<footer>Awarded {date} &middot; <a href="/hof">Hall of Fame</a></footer>
</div>
</body>
</html>
"#,
        citation = escape(&details.citation),
        image = escape(&details.image_blob_url),
        badge_name = escape(&details.badge_name),
        person_name = escape(&details.person_name),
        project_name = escape(&details.project_name),
        project_desc = escape(&details.project_desc),
        date = details.created_at.format("%B %e, %Y"),
    )
}

fn render_hof_page(items: &[AwardListItem]) -> String {
    let cards: String = items
        .iter()
        .map(|item| {
            let handle = item
                .person_handle
                .as_deref()
                .map(|h| format!(" <span class=\"handle\">{}</span>", escape(h)))
                .unwrap_or_default();
            format!(
                r#"<a class="card" href="/a/{permalink}">
<img src="{thumb}" alt="{badge} badge">
<h3>{badge}</h3>
<p>{person}{handle}</p>
<p class="project">{project}</p>
</a>
"#,
                permalink = escape(&item.public_permalink),
                thumb = escape(&item.thumb_blob_url),
                badge = escape(&item.badge_name),
                person = escape(&item.person_name),
                project = escape(&item.project_name),
            )
        })
        .collect();

    let body = if items.is_empty() {
        "<p class=\"empty\">No awards have been published yet.</p>".to_string()
    } else {
        format!("<div class=\"grid\">{cards}</div>")
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Hall of Fame</title>
<style>
body {{ font-family: system-ui, sans-serif; background: #F8FAFC; color: #0F172A;
       padding: 3rem 1rem; max-width: 64rem; margin: 0 auto; }}
.grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: 1.5rem; }}
.card {{ text-decoration: none; color: inherit; background: white; border-radius: 0.75rem;
        padding: 1rem; text-align: center; box-shadow: 0 1px 3px rgba(15, 23, 42, 0.1); }}
.card img {{ width: 8rem; height: 8rem; object-fit: contain; }}
.handle {{ color: #64748B; }}
.project {{ color: #475569; font-size: 0.9rem; }}
.empty {{ color: #64748B; text-align: center; }}
</style>
</head>
<body>
<h1>Hall of Fame</h1>
{body}
</body>
</html>
"#,
    )
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
