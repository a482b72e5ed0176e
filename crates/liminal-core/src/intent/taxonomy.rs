use std::fmt;

use serde::{Deserialize, Serialize};

/// The 10 communicative intents an envelope can carry.
///
/// Intent strings outside the taxonomy deserialize to [`IntentType::Unknown`]
/// rather than failing, so records written by newer peers still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IntentType {
    Ask,
    Tell,
    Propose,
    Confirm,
    Notify,
    Sync,
    Plan,
    Agree,
    Disagree,
    Reflect,
    Unknown,
}

impl IntentType {
    /// Number of intents in the taxonomy (excluding `Unknown`).
    pub const COUNT: usize = 10;

    /// All known variants for iteration.
    pub const ALL: [IntentType; 10] = [
        Self::Ask,
        Self::Tell,
        Self::Propose,
        Self::Confirm,
        Self::Notify,
        Self::Sync,
        Self::Plan,
        Self::Agree,
        Self::Disagree,
        Self::Reflect,
    ];

    /// Wire name of the intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ask => "ask",
            Self::Tell => "tell",
            Self::Propose => "propose",
            Self::Confirm => "confirm",
            Self::Notify => "notify",
            Self::Sync => "sync",
            Self::Plan => "plan",
            Self::Agree => "agree",
            Self::Disagree => "disagree",
            Self::Reflect => "reflect",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for IntentType {
    fn from(value: &str) -> Self {
        match value {
            "ask" => Self::Ask,
            "tell" => Self::Tell,
            "propose" => Self::Propose,
            "confirm" => Self::Confirm,
            "notify" => Self::Notify,
            "sync" => Self::Sync,
            "plan" => Self::Plan,
            "agree" => Self::Agree,
            "disagree" => Self::Disagree,
            "reflect" => Self::Reflect,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for IntentType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<IntentType> for String {
    fn from(value: IntentType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for IntentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
