use tracing::warn;

use super::TextProvider;
use crate::error::AppError;
use crate::models::brief::{BadgeBrief, BadgeStyle, fallback_brief, parse_brief};

/// Fixed instructional prompt for the brief step.
pub fn brief_system_prompt(style: BadgeStyle) -> String {
    format!(
        "You are a badge art director. Produce a SINGLE, concise visual brief for an AI image \
         model to generate a clean, app-style achievement badge.\n\
         \n\
         Constraints:\n\
         - Style: {} ({})\n\
         - Text: \u{2264}3 words (short title)\n\
         - Icon: 1 strong symbol matching the project description\n\
         - Palette: modern, high-contrast, accessible\n\
         - Layout: centered icon, clear title, whitespace\n\
         \n\
         Output JSON only:\n\
         {{\n\
           \"short_title\": \"...\",\n\
           \"icon_concept\": \"...\",\n\
           \"colors\": {{ \"primary\": \"...\", \"accent\": \"...\", \"bg\": \"...\" }},\n\
           \"image_prompt\": \"...\"\n\
         }}",
        style.key(),
        style.description(),
    )
}

pub fn brief_user_prompt(name: &str, description: &str) -> String {
    format!("Create a badge brief for:\nName: {name}\nDescription: {description}")
}

/// The long prompt sent to the image model, embedding the brief, the style
/// description, compositional constraints, and the negative-constraint list.
pub fn image_prompt(brief: &BadgeBrief, style: BadgeStyle, reference_style: Option<&str>) -> String {
    let mut prompt = format!(
        "Generate a flat, minimal {} achievement badge:\n\
         - Central icon: {}\n\
         - Title: \"{}\" in bold sans-serif\n\
         - Palette: primary {}, accent {}, background {}\n\
         - Aesthetic: app-badge, clean, vector-like, high contrast\n\
         - Style: {}\n\
         - Composition: exactly one centered badge on a plain transparent or white background\n\
         - Avoid: duplicate badges, photorealism, tiny text, clutter, busy backgrounds, \
         gradients, shadows",
        style.key(),
        brief.icon_concept,
        brief.short_title,
        brief.colors.primary,
        brief.colors.accent,
        brief.colors.bg,
        style.description(),
    );

    if let Some(reference) = reference_style
        && !reference.trim().is_empty()
    {
        prompt.push_str(&format!("\n- Reference style: {}", reference.trim()));
    }

    prompt
}

/// Run the brief step against the configured text provider.
///
/// Provider transport failures propagate; an unparseable or invalid response
/// is replaced by the deterministic fallback brief so the admin flow never
/// stalls on a chatty model.
pub async fn generate_brief(
    provider: &dyn TextProvider,
    name: &str,
    description: &str,
    style: BadgeStyle,
) -> Result<BadgeBrief, AppError> {
    let system = brief_system_prompt(style);
    let user = brief_user_prompt(name, description);

    let raw = provider.complete(&system, &user).await?;

    match parse_brief(&raw) {
        Ok(brief) => Ok(brief),
        Err(err) => {
            warn!("Brief response rejected ({err:?}); using fallback brief");
            Ok(fallback_brief(name, description, style))
        }
    }
}
