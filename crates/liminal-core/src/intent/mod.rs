//! Communicative intent taxonomy and the affinity vectors used for
//! intent similarity.

mod taxonomy;
mod vectors;

pub use taxonomy::IntentType;
pub use vectors::{affinity_vector, AffinityVector, AFFINITY_DIMENSIONS};
