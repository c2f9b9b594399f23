//! Per-tick transition engine for the BeeClust simulation.
//!
//! [`TransitionEngine`] advances a grid by exactly one discrete tick,
//! applying the movement, collision, stopping, and heading-change rules
//! to every bee. The engine is generic over an injected [`rand::Rng`],
//! so a seeded generator yields bit-identical traces across runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod metrics;
mod tick;

pub use metrics::TickMetrics;
pub use tick::TransitionEngine;
