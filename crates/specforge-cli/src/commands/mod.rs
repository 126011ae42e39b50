//! Command implementations.

pub mod consolidate;
pub mod fix;
pub mod ingest;
pub mod preview;
pub mod structure;
pub mod validate;

pub use self::consolidate::execute_consolidate;
pub use self::fix::execute_fix_processors;
pub use self::ingest::execute_ingest;
pub use self::preview::execute_preview;
pub use self::structure::execute_structure;
pub use self::validate::execute_validate;
