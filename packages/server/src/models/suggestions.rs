use serde::Serialize;

use crate::models::brief::BadgeStyle;

/// A curated badge idea offered to admins in the create flow, with a style
/// and template preselected to match its category.
#[derive(Clone, Serialize, utoipa::ToSchema)]
pub struct BadgeSuggestion {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub suggested_style: BadgeStyle,
    pub suggested_template: Option<&'static str>,
}

pub const CATEGORIES: &[&str] = &[
    "Gamification",
    "Personalization",
    "Data Visualization",
    "AI Integration",
    "Technical Excellence",
    "Hackathon Special",
];

pub const SUGGESTIONS: &[BadgeSuggestion] = &[
    BadgeSuggestion {
        name: "Level Up Legend",
        description: "Created an innovative gamification system that transforms user engagement through points, levels, and progression mechanics",
        category: "Gamification",
        suggested_style: BadgeStyle::RoundMedalMinimal,
        suggested_template: Some("gaming-achievement"),
    },
    BadgeSuggestion {
        name: "Quest Master",
        description: "Designed and implemented a compelling quest-based user journey with meaningful rewards and challenges",
        category: "Gamification",
        suggested_style: BadgeStyle::ShieldCrestModern,
        suggested_template: Some("gaming-achievement"),
    },
    BadgeSuggestion {
        name: "Leaderboard Luminary",
        description: "Built dynamic competitive features that drive healthy competition and community engagement",
        category: "Gamification",
        suggested_style: BadgeStyle::RibbonPlaque,
        suggested_template: Some("gaming-achievement"),
    },
    BadgeSuggestion {
        name: "Achievement Architect",
        description: "Crafted a sophisticated achievement system that motivates users through meaningful milestones and badges",
        category: "Gamification",
        suggested_style: BadgeStyle::RoundMedalMinimal,
        suggested_template: Some("gaming-achievement"),
    },
    BadgeSuggestion {
        name: "Personalization Pioneer",
        description: "Developed intelligent personalization that adapts user experience based on behavior and preferences",
        category: "Personalization",
        suggested_style: BadgeStyle::ShieldCrestModern,
        suggested_template: Some("corporate-professional"),
    },
    BadgeSuggestion {
        name: "Recommendation Wizard",
        description: "Created smart recommendation engines that deliver perfectly tailored content and suggestions",
        category: "Personalization",
        suggested_style: BadgeStyle::RoundMedalMinimal,
        suggested_template: Some("flat-modern"),
    },
    BadgeSuggestion {
        name: "Adaptive Interface Innovator",
        description: "Built dynamic UI that morphs and customizes itself to individual user patterns and needs",
        category: "Personalization",
        suggested_style: BadgeStyle::RibbonPlaque,
        suggested_template: Some("flat-modern"),
    },
    BadgeSuggestion {
        name: "User Journey Craftsperson",
        description: "Designed personalized user flows that create unique experiences for each individual",
        category: "Personalization",
        suggested_style: BadgeStyle::ShieldCrestModern,
        suggested_template: Some("corporate-professional"),
    },
    BadgeSuggestion {
        name: "Data Storyteller Supreme",
        description: "Transformed complex datasets into compelling visual narratives that reveal hidden insights",
        category: "Data Visualization",
        suggested_style: BadgeStyle::RibbonPlaque,
        suggested_template: Some("corporate-professional"),
    },
    BadgeSuggestion {
        name: "Chart Champion",
        description: "Created stunning interactive visualizations that make data accessible and engaging",
        category: "Data Visualization",
        suggested_style: BadgeStyle::RoundMedalMinimal,
        suggested_template: Some("flat-modern"),
    },
    BadgeSuggestion {
        name: "Dashboard Dynamo",
        description: "Built comprehensive dashboards that turn raw data into actionable business intelligence",
        category: "Data Visualization",
        suggested_style: BadgeStyle::ShieldCrestModern,
        suggested_template: Some("corporate-professional"),
    },
    BadgeSuggestion {
        name: "Insight Illuminator",
        description: "Uncovered breakthrough insights through innovative data visualization and analysis techniques",
        category: "Data Visualization",
        suggested_style: BadgeStyle::RoundMedalMinimal,
        suggested_template: Some("technical-blueprint"),
    },
    BadgeSuggestion {
        name: "AI Whisperer",
        description: "Seamlessly integrated AI models into applications with exceptional user experience and performance",
        category: "AI Integration",
        suggested_style: BadgeStyle::ShieldCrestModern,
        suggested_template: Some("technical-blueprint"),
    },
    BadgeSuggestion {
        name: "Prompt Engineering Pro",
        description: "Mastered the art of AI prompt design to create sophisticated and reliable AI-powered features",
        category: "AI Integration",
        suggested_style: BadgeStyle::RoundMedalMinimal,
        suggested_template: Some("technical-blueprint"),
    },
    BadgeSuggestion {
        name: "Code Collaboration Catalyst",
        description: "Used AI tools to accelerate development and enhance code quality through intelligent automation",
        category: "AI Integration",
        suggested_style: BadgeStyle::RibbonPlaque,
        suggested_template: Some("corporate-professional"),
    },
    BadgeSuggestion {
        name: "ML Model Maestro",
        description: "Successfully trained, deployed, and integrated custom machine learning models into production apps",
        category: "AI Integration",
        suggested_style: BadgeStyle::ShieldCrestModern,
        suggested_template: Some("technical-blueprint"),
    },
    BadgeSuggestion {
        name: "Full-Stack Fusion",
        description: "Delivered end-to-end solutions combining frontend, backend, and AI components flawlessly",
        category: "Technical Excellence",
        suggested_style: BadgeStyle::RoundMedalMinimal,
        suggested_template: Some("corporate-professional"),
    },
    BadgeSuggestion {
        name: "API Artisan",
        description: "Created elegant and efficient APIs that seamlessly connect AI services with user applications",
        category: "Technical Excellence",
        suggested_style: BadgeStyle::ShieldCrestModern,
        suggested_template: Some("technical-blueprint"),
    },
    BadgeSuggestion {
        name: "Performance Optimizer",
        description: "Achieved exceptional app performance while integrating complex AI and data processing features",
        category: "Technical Excellence",
        suggested_style: BadgeStyle::RibbonPlaque,
        suggested_template: Some("technical-blueprint"),
    },
    BadgeSuggestion {
        name: "Innovation Integrator",
        description: "Combined multiple cutting-edge technologies to create something truly unique and impactful",
        category: "Technical Excellence",
        suggested_style: BadgeStyle::RoundMedalMinimal,
        suggested_template: Some("flat-modern"),
    },
    BadgeSuggestion {
        name: "48-Hour Hero",
        description: "Delivered a fully functional, polished application within the hackathon timeframe",
        category: "Hackathon Special",
        suggested_style: BadgeStyle::RoundMedalMinimal,
        suggested_template: Some("gaming-achievement"),
    },
    BadgeSuggestion {
        name: "Demo Day Dazzler",
        description: "Presented a compelling demonstration that captivated judges and audience with clear impact",
        category: "Hackathon Special",
        suggested_style: BadgeStyle::RibbonPlaque,
        suggested_template: Some("vintage-stamp"),
    },
    BadgeSuggestion {
        name: "Team Synergy Star",
        description: "Facilitated exceptional collaboration and coordination within a diverse hackathon team",
        category: "Hackathon Special",
        suggested_style: BadgeStyle::ShieldCrestModern,
        suggested_template: Some("corporate-professional"),
    },
    BadgeSuggestion {
        name: "Problem Solver Extraordinaire",
        description: "Tackled real-world challenges with creative technology solutions that address genuine user needs",
        category: "Hackathon Special",
        suggested_style: BadgeStyle::RoundMedalMinimal,
        suggested_template: Some("flat-modern"),
    },
    BadgeSuggestion {
        name: "Best Failure",
        description: "Most fearless attempt that didn't work - celebrated for taking bold risks, learning from failure, and pushing boundaries",
        category: "Hackathon Special",
        suggested_style: BadgeStyle::ShieldCrestModern,
        suggested_template: Some("vintage-stamp"),
    },
];

/// Filter the catalog by category; `None` returns everything.
pub fn by_category(category: Option<&str>) -> Vec<BadgeSuggestion> {
    match category {
        None => SUGGESTIONS.to_vec(),
        Some(c) => SUGGESTIONS
            .iter()
            .filter(|s| s.category == c)
            .cloned()
            .collect(),
    }
}
