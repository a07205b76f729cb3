/// A named style guide an admin can layer on top of the free-text description.
pub struct StyleTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub visual_style: &'static str,
    pub color_guidance: &'static str,
    pub icon_style: &'static str,
    pub typography: &'static str,
    pub layout_rules: &'static str,
    pub examples: &'static [&'static str],
}

pub const STYLE_TEMPLATES: &[StyleTemplate] = &[
    StyleTemplate {
        id: "flat-modern",
        name: "Flat Modern",
        visual_style: "Flat design aesthetic, no gradients or shadows, solid fill colors, geometric shapes",
        color_guidance: "Use maximum 3 colors, high contrast between elements, vibrant but not neon",
        icon_style: "Simple geometric icon, single color, centered, takes up 40% of badge area",
        typography: "Bold sans-serif font, all caps for title, clean and readable",
        layout_rules: "Centered composition, generous whitespace, icon above text, symmetrical",
        examples: &["Material Design badges", "iOS app achievement badges"],
    },
    StyleTemplate {
        id: "vintage-stamp",
        name: "Vintage Stamp",
        visual_style: "Vintage certificate aesthetic, ornamental borders, aged paper texture feel",
        color_guidance: "Muted colors, sepia tones or deep rich colors like burgundy and navy",
        icon_style: "Detailed line art or engraving style icon, classical illustration",
        typography: "Serif or decorative font, mix of sizes, formal certificate style",
        layout_rules: "Ornate border, central emblem, text ribbons or banners",
        examples: &["Postal stamps", "University certificates", "Classical medals"],
    },
    StyleTemplate {
        id: "gaming-achievement",
        name: "Gaming Achievement",
        visual_style: "Video game UI aesthetic, crisp edges, slight metallic sheen, star or gem accents",
        color_guidance: "Gold, silver, bronze metallic colors with bright accent colors",
        icon_style: "Detailed game-style icon, can have subtle highlights, action-oriented",
        typography: "Bold gaming font, slightly stylized, easy to read at small sizes",
        layout_rules: "Circular or shield shape, stars or points indicators, level/tier suggestion",
        examples: &["Xbox achievements", "PlayStation trophies", "Steam badges"],
    },
    StyleTemplate {
        id: "corporate-professional",
        name: "Corporate Professional",
        visual_style: "Professional, trustworthy, clean lines, subtle sophistication",
        color_guidance: "Corporate blues, grays, single accent color, conservative palette",
        icon_style: "Simplified professional icon, abstract or symbolic, minimal detail",
        typography: "Professional sans-serif, clean and modern, excellent readability",
        layout_rules: "Structured grid, clear hierarchy, plenty of negative space",
        examples: &["LinkedIn certifications", "Professional badges", "Corporate awards"],
    },
    StyleTemplate {
        id: "playful-cartoon",
        name: "Playful Cartoon",
        visual_style: "Cartoon illustration style, rounded edges, friendly and approachable",
        color_guidance: "Bright, cheerful colors, pastels or vibrant primaries, fun combinations",
        icon_style: "Cute character or mascot style, expressive, slightly exaggerated",
        typography: "Rounded, friendly font, playful but readable, can be slightly bouncy",
        layout_rules: "Dynamic composition, can be asymmetrical, fun background elements",
        examples: &["Duolingo achievements", "Kids app rewards", "Social media badges"],
    },
    StyleTemplate {
        id: "technical-blueprint",
        name: "Technical Blueprint",
        visual_style: "Technical drawing aesthetic, blueprint style, precise lines, grid background",
        color_guidance: "Monochromatic blue and white, or dark mode with neon accents",
        icon_style: "Technical diagram style, wireframe, schematic representation",
        typography: "Monospace or technical font, precise, includes version numbers or codes",
        layout_rules: "Grid-based layout, technical annotations, measurement marks",
        examples: &["GitHub badges", "Technical certifications", "Engineering awards"],
    },
];

pub fn find_template(id: &str) -> Option<&'static StyleTemplate> {
    STYLE_TEMPLATES.iter().find(|t| t.id == id)
}

fn template_prompt(template: &StyleTemplate) -> String {
    format!(
        "Visual Style: {}\nColor Guidance: {}\nIcon Style: {}\nTypography: {}\nLayout: {}",
        template.visual_style,
        template.color_guidance,
        template.icon_style,
        template.typography,
        template.layout_rules,
    )
}

/// Combine a template id and a free-text reference style into one style
/// guide. Unknown template ids contribute nothing beyond the reference text.
pub fn combine_style_guide(template_id: Option<&str>, reference_style: Option<&str>) -> String {
    let template = template_id.and_then(find_template);

    let Some(template) = template else {
        return reference_style.unwrap_or_default().to_string();
    };

    let mut combined = template_prompt(template);
    if let Some(reference) = reference_style
        && !reference.trim().is_empty()
    {
        combined.push_str(&format!("\nAdditional style notes: {reference}"));
    }
    if !template.examples.is_empty() {
        combined.push_str(&format!(
            "\nReference examples: {}",
            template.examples.join(", ")
        ));
    }
    combined
}
