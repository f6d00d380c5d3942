// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod file_info;
pub mod variant;
pub mod year_month;

pub use counts::GameCount;
pub use file_info::FileSize;
pub use variant::{DEFAULT_VARIANTS, Variant};
pub use year_month::YearMonth;
