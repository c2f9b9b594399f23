//! Core types for the BeeClust swarm simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the BeeClust workspace:
//! the [`Cell`] and [`Heading`] sum types, the owning [`Grid`],
//! simulation [`Params`], and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod params;

pub use cell::{Cell, Heading, AMNESIA};
pub use error::{ConfigError, DomainError};
pub use grid::{Grid, Pos};
pub use params::Params;
