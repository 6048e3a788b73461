// Core Types - Edit requests and the feature/style enumerations
//
// These types describe what the user asked for; prompt construction and
// dispatch live in `prompts` and `invoker`.

use serde::{Deserialize, Serialize};

/// Editing intent selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// Rewrite the message in a named or custom tone
    Tone,
    /// Fix spelling and grammar only
    Grammar,
    /// Shorten the message, or expand it with more detail
    ShortenElaborate,
    /// Translate into a target language
    Translation,
    /// Generate possible continuations of the message
    Continuation,
    /// Provide feedback plus a revised version
    Analysis,
}

impl Feature {
    /// Parse a feature label, returning `None` for anything unrecognized.
    ///
    /// Unknown labels are rejected here rather than mapped to a sentinel:
    /// an `EditRequest` can only be built for one of the six known intents.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tone" | "change writing tone" => Some(Self::Tone),
            "grammar" | "spelling and grammar" => Some(Self::Grammar),
            "shorten/elaborate" | "shorten_elaborate" => Some(Self::ShortenElaborate),
            "translation" | "translate" => Some(Self::Translation),
            "continuation" | "expand my writing" => Some(Self::Continuation),
            "analysis" | "analyze my writing" => Some(Self::Analysis),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tone => "tone",
            Self::Grammar => "grammar",
            Self::ShortenElaborate => "shorten_elaborate",
            Self::Translation => "translation",
            Self::Continuation => "continuation",
            Self::Analysis => "analysis",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Tone => "Change writing tone",
            Self::Grammar => "Spelling and grammar",
            Self::ShortenElaborate => "Shorten/elaborate",
            Self::Translation => "Translation",
            Self::Continuation => "Expand my writing",
            Self::Analysis => "Analyze my writing",
        }
    }
}

/// Named tone transformation styles
///
/// Any label not in this table (including an empty custom label) falls
/// through to the synthesized "sound like" instruction in `prompts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToneStyle {
    Emojify,
    Formal,
    Polite,
    Shakespeare,
    Excited,
    Chill,
    Lyrical,
}

impl ToneStyle {
    /// Look up a named style, case-insensitively. `None` means the label is
    /// a custom style and gets the fallback instruction.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "emojify" => Some(Self::Emojify),
            "formal" | "make formal" => Some(Self::Formal),
            "polite" | "make polite" => Some(Self::Polite),
            "shakespearify" | "shakespeare" => Some(Self::Shakespeare),
            "excited" | "excited!" => Some(Self::Excited),
            "chill" => Some(Self::Chill),
            "lyrical" => Some(Self::Lyrical),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Emojify => "Emojify",
            Self::Formal => "Make Formal",
            Self::Polite => "Make Polite",
            Self::Shakespeare => "Shakespearify",
            Self::Excited => "Excited!",
            Self::Chill => "Chill",
            Self::Lyrical => "Lyrical",
        }
    }
}

/// A single user edit request
///
/// `detail` is feature-dependent: a tone label, the "shorten"/"elaborate"
/// direction, a target language name, or unused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRequest {
    pub message: String,
    pub feature: Feature,
    pub detail: String,
}

impl EditRequest {
    pub fn new(message: impl Into<String>, feature: Feature, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            feature,
            detail: detail.into(),
        }
    }
}
