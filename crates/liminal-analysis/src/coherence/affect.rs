use liminal_core::Message;

use crate::math::average_pad_variance;

/// Stability decays exponentially with PAD spread.
const VARIANCE_DECAY: f64 = 5.0;

/// `exp(-5 × mean per-axis PAD variance)` across the window.
///
/// Range: 0.0 – 1.0. Fewer than two messages with affect → 1.0.
pub fn calculate(messages: &[&Message]) -> f64 {
    match average_pad_variance(messages) {
        Some(avg) => (-VARIANCE_DECAY * avg).exp(),
        None => 1.0,
    }
}
