//! Small numeric helpers shared by the scoring engines.

use liminal_core::Message;

/// Clamp into [0, 1]. NaN maps to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance; 0 for an empty slice.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Cosine similarity; 0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a * mag_b)
}

/// Mean of the per-axis PAD variances across the window.
///
/// `None` when fewer than two messages carry a PAD vector.
pub fn average_pad_variance(messages: &[&Message]) -> Option<f64> {
    let pads: Vec<[f64; 3]> = messages
        .iter()
        .filter_map(|m| m.envelope.pad())
        .map(|p| p.axes())
        .collect();
    if pads.len() < 2 {
        return None;
    }
    let per_axis: Vec<f64> = (0..3)
        .map(|axis| variance(&pads.iter().map(|p| p[axis]).collect::<Vec<_>>()))
        .collect();
    Some(mean(&per_axis))
}
