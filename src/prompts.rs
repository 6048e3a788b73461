// Prompt Construction - Instruction text for each editing feature
//
// Pure string assembly, no I/O. Every prompt wraps a feature-specific
// instruction in the conversational envelope the model expects and embeds
// the user's message exactly once, single-quoted.

use crate::types::{Feature, ToneStyle};

/// Build the full prompt for an edit request.
///
/// Total and deterministic: every `(message, feature, detail)` combination
/// produces a non-empty prompt, including tone requests whose label is not
/// among the named styles (those get the synthesized "sound like" form).
pub fn build_prompt(message: &str, feature: Feature, detail: &str) -> String {
    let instruction = match feature {
        Feature::Tone => tone_instruction(message, detail),
        Feature::Grammar => format!(
            "Please correct any spelling and grammar mistakes in the following message \
             and return only the corrected text: '{message}'"
        ),
        Feature::ShortenElaborate => {
            let action = if detail == "elaborate" {
                "expand with more details"
            } else {
                "shorten"
            };
            format!("Please {action} the following message and return only the text: '{message}'")
        }
        Feature::Translation => format!(
            "Please translate the following message into {detail} \
             and return only the translated text: '{message}'"
        ),
        Feature::Continuation => format!(
            "Please generate three possible continuations for the following message: '{message}'"
        ),
        Feature::Analysis => format!(
            "Please analyze the following message and provide detailed feedback and \
             suggestions for improvement, and also return a revised version of the text: \
             '{message}'"
        ),
    };

    format!("Human: {instruction}\n\nAssistant:")
}

/// Tone instruction: named styles first, then the custom-label fallback.
fn tone_instruction(message: &str, detail: &str) -> String {
    match ToneStyle::from_label(detail) {
        Some(style) => format!(
            "Please {} and return only the transformed text: '{message}'",
            style_phrase(style)
        ),
        None => format!(
            "Please rewrite the following message to sound like '{detail}' \
             and return only the transformed text: '{message}'"
        ),
    }
}

/// Per-style rewrite phrase for the named tone styles
fn style_phrase(style: ToneStyle) -> &'static str {
    match style {
        ToneStyle::Emojify => "emojify the following message, adding fitting emojis throughout",
        ToneStyle::Formal => "rewrite the following message in a formal and professional tone",
        ToneStyle::Polite => "rewrite the following message to be more polite and courteous",
        ToneStyle::Shakespeare => {
            "rewrite the following message in the style of Shakespearean English"
        }
        ToneStyle::Excited => "rewrite the following message with an excited and energetic tone",
        ToneStyle::Chill => "rewrite the following message in a relaxed and casual tone",
        ToneStyle::Lyrical => "rewrite the following message in a lyrical and poetic style",
    }
}
