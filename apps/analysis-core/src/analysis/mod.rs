//! The topic-analysis pipeline: classification, normalization, derived
//! calculations, narrative synthesis and orchestration.

pub mod calc;
pub mod classify;
pub mod normalize;
pub mod pipeline;
pub mod synthesize;
pub mod types;
