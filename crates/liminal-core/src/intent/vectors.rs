use super::taxonomy::IntentType;

/// Dimensionality of an intent affinity vector.
pub const AFFINITY_DIMENSIONS: usize = 6;

/// Hand-tuned role encoding of an intent.
///
/// Axes: inquiry, assertion, proposal, commitment, broadcast, deliberation.
pub type AffinityVector = [f64; AFFINITY_DIMENSIONS];

const ASK: AffinityVector = [1.0, 0.5, 0.0, 0.0, 0.0, 0.2];
const TELL: AffinityVector = [0.5, 1.0, 0.0, 0.0, 0.1, 0.2];
const PROPOSE: AffinityVector = [0.1, 0.1, 1.0, 0.6, 0.0, 0.3];
const CONFIRM: AffinityVector = [0.0, 0.0, 0.6, 1.0, 0.0, 0.1];
const NOTIFY: AffinityVector = [0.0, 0.4, 0.0, 0.0, 1.0, 0.0];
const SYNC: AffinityVector = [0.2, 0.4, 0.1, 0.0, 0.8, 0.3];
const PLAN: AffinityVector = [0.3, 0.3, 0.5, 0.3, 0.0, 1.0];
const AGREE: AffinityVector = [0.0, 0.1, 0.6, 0.9, 0.0, 0.1];
const DISAGREE: AffinityVector = [0.2, 0.2, 0.4, 0.7, 0.0, 0.2];
const REFLECT: AffinityVector = [0.4, 0.6, 0.1, 0.0, 0.0, 0.8];

/// Affinity vector for an intent. `Unknown` borrows the "tell" vector.
pub fn affinity_vector(intent: IntentType) -> &'static AffinityVector {
    match intent {
        IntentType::Ask => &ASK,
        IntentType::Tell | IntentType::Unknown => &TELL,
        IntentType::Propose => &PROPOSE,
        IntentType::Confirm => &CONFIRM,
        IntentType::Notify => &NOTIFY,
        IntentType::Sync => &SYNC,
        IntentType::Plan => &PLAN,
        IntentType::Agree => &AGREE,
        IntentType::Disagree => &DISAGREE,
        IntentType::Reflect => &REFLECT,
    }
}
