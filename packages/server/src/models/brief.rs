use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Maximum length of a brief's short title, in characters.
pub const MAX_TITLE_CHARS: usize = 15;

/// The three fixed badge shapes an admin can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeStyle {
    RoundMedalMinimal,
    ShieldCrestModern,
    RibbonPlaque,
}

impl BadgeStyle {
    /// The wire/database key, identical to the serde representation.
    pub fn key(&self) -> &'static str {
        match self {
            BadgeStyle::RoundMedalMinimal => "round-medal-minimal",
            BadgeStyle::ShieldCrestModern => "shield-crest-modern",
            BadgeStyle::RibbonPlaque => "ribbon-plaque",
        }
    }

    /// Short visual description embedded into the generation prompts.
    pub fn description(&self) -> &'static str {
        match self {
            BadgeStyle::RoundMedalMinimal => {
                "circular medal with scalloped edges, minimalist design"
            }
            BadgeStyle::ShieldCrestModern => "shield or crest shape, modern heraldic style",
            BadgeStyle::RibbonPlaque => {
                "rectangular plaque with ribbon banner, achievement certificate style"
            }
        }
    }
}

/// Image model quality setting.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    #[default]
    Standard,
    Hd,
}

impl Quality {
    pub fn key(&self) -> &'static str {
        match self {
            Quality::Standard => "standard",
            Quality::Hd => "hd",
        }
    }
}

/// Three-color palette produced by the brief step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BriefColors {
    #[schema(example = "#1E3A8A")]
    pub primary: String,
    #[schema(example = "#F59E0B")]
    pub accent: String,
    #[schema(example = "#F8FAFC")]
    pub bg: String,
}

/// Structured output of the text-generation step, consumed by the image step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BadgeBrief {
    /// Display title, at most 15 characters.
    #[schema(example = "Code Warrior")]
    pub short_title: String,
    #[schema(example = "crossed swords over a terminal window")]
    pub icon_concept: String,
    pub colors: BriefColors,
    pub image_prompt: String,
}

impl BadgeBrief {
    /// Structural validation shared by the provider response path and the
    /// client-supplied brief on the generate-image endpoint.
    pub fn validate(&self) -> Result<(), AppError> {
        let title = self.short_title.trim();
        if title.is_empty() || title.chars().count() > MAX_TITLE_CHARS {
            return Err(AppError::Validation(format!(
                "short_title must be 1-{MAX_TITLE_CHARS} characters"
            )));
        }
        if self.icon_concept.trim().is_empty() {
            return Err(AppError::Validation("icon_concept must not be empty".into()));
        }
        for (field, value) in [
            ("colors.primary", &self.colors.primary),
            ("colors.accent", &self.colors.accent),
            ("colors.bg", &self.colors.bg),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} must not be empty")));
            }
        }
        if self.image_prompt.trim().is_empty() {
            return Err(AppError::Validation("image_prompt must not be empty".into()));
        }
        Ok(())
    }
}

/// Parse a model response into a validated brief.
///
/// Tolerates a Markdown code fence around the JSON but nothing else; any
/// parse or validation failure is an error so the caller can fall back.
pub fn parse_brief(raw: &str) -> Result<BadgeBrief, AppError> {
    let trimmed = raw.trim();
    let json = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or(trimmed);

    let brief: BadgeBrief = serde_json::from_str(json)
        .map_err(|e| AppError::Validation(format!("Malformed brief JSON: {e}")))?;
    brief.validate()?;
    Ok(brief)
}

/// Deterministic substitute brief used when the provider returns something
/// unparseable. Derived only from the request inputs.
pub fn fallback_brief(name: &str, description: &str, style: BadgeStyle) -> BadgeBrief {
    let short_title: String = name.trim().chars().take(MAX_TITLE_CHARS).collect();
    let short_title = if short_title.is_empty() {
        "Achievement".to_string()
    } else {
        short_title.trim_end().to_string()
    };

    let icon_concept = description
        .split_whitespace()
        .take(3)
        .collect::<Vec<_>>()
        .join(" ");
    let icon_concept = if icon_concept.is_empty() {
        "laurel wreath".to_string()
    } else {
        format!("{icon_concept} emblem")
    };

    let colors = BriefColors {
        primary: "#1E3A8A".to_string(),
        accent: "#F59E0B".to_string(),
        bg: "#F8FAFC".to_string(),
    };

    let image_prompt = format!(
        "A clean, app-style achievement badge for \"{}\": {}. Centered {} icon, \
         bold sans-serif title, {} shape, flat vector aesthetic, high contrast.",
        name.trim(),
        description.trim(),
        icon_concept,
        style.description(),
    );

    BadgeBrief {
        short_title,
        icon_concept,
        colors,
        image_prompt,
    }
}
