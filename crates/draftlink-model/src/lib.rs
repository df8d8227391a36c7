pub mod pool;
pub mod records;

pub use pool::DraftPool;
pub use records::{DraftFields, DraftRecord, MatchResult, StatRecord, StatTable};
