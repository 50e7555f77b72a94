//! Client-side persona display presets.
//!
//! The remote service owns persona identity (id, name, subtitle); the preview
//! blurbs and icons shown in the persona list are client-side decorations and
//! live here.

/// Icon shown for a persona id with no preset entry.
pub const DEFAULT_ICON: &str = "👤";

/// Returns the preview blurb for a stock persona id, if one exists.
pub fn preview_for(persona_id: &str) -> Option<&'static str> {
    match persona_id {
        "dawn" => Some(
            "Guides conversations through brief, caring messages while asking \
             gentle questions to help people find their own path forward.",
        ),
        "alex" => Some(
            "Teaches you to spot unhelpful thoughts and replace them with \
             better ones to improve your mood and actions.",
        ),
        "maya" => Some(
            "Explores how your past experiences shape your present life to \
             help you grow and understand yourself.",
        ),
        "james" => Some(
            "Creates a warm, accepting space where you can share openly while \
             being supported in your personal growth.",
        ),
        "sarah" => Some(
            "Combines mindfulness with practical skills to help you handle \
             emotions, stress, and relationships better.",
        ),
        _ => None,
    }
}

/// Returns the icon token for a persona id, falling back to [`DEFAULT_ICON`].
pub fn icon_for(persona_id: &str) -> &'static str {
    match persona_id {
        "dawn" => "💜",
        "alex" => "💚",
        "maya" => "💙",
        "james" => "🧡",
        "sarah" => "💛",
        _ => DEFAULT_ICON,
    }
}
