use serde::{Deserialize, Serialize};

/// Pleasure / Arousal / Dominance affect vector, each axis in [-1, 1].
///
/// Serialized as a 3-element array `[p, a, d]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Pad {
    pub pleasure: f64,
    pub arousal: f64,
    pub dominance: f64,
}

impl Pad {
    /// Create a PAD vector, clamping each axis into [-1, 1].
    pub fn new(pleasure: f64, arousal: f64, dominance: f64) -> Self {
        Self {
            pleasure: pleasure.clamp(-1.0, 1.0),
            arousal: arousal.clamp(-1.0, 1.0),
            dominance: dominance.clamp(-1.0, 1.0),
        }
    }

    /// Axis values in P, A, D order.
    pub fn axes(&self) -> [f64; 3] {
        [self.pleasure, self.arousal, self.dominance]
    }
}

impl From<[f64; 3]> for Pad {
    fn from(value: [f64; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Pad> for [f64; 3] {
    fn from(value: Pad) -> Self {
        value.axes()
    }
}

/// Emotional and affective context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Affect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad: Option<Pad>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}
