// crates/engine/src/lib.rs
pub mod assemble;
pub mod config;
pub mod counts;
pub mod error;
pub mod listing;
pub mod record;
pub mod render;
pub mod template;

pub use assemble::{RunReport, VariantSummary, run};
pub use config::{Config, ConfigBuilder};
pub use error::{EngineError, Result};
pub use record::FileRecord;
pub use render::Totals;
