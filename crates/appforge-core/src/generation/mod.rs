//! Generation progress domain module.
//!
//! # Module Structure
//!
//! - `model`: Event-driven generation state machine
//! - `config`: Validated driver configuration

mod config;
mod model;

// Re-export public API
pub use config::{DEFAULT_STEP, DEFAULT_TICK_INTERVAL, GenerationConfig};
pub use model::{GenerationEvent, GenerationPhase, GenerationState, GenerationStatus};
