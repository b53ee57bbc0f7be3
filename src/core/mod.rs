pub mod add;
pub mod backup;
pub mod del;
pub mod edit;
pub mod filter;
pub mod import;
pub mod log;
pub mod range;
pub mod report;
pub mod validate;

pub use filter::{date_bounds, filter};
pub use report::{Report, build_report};
pub use validate::EntryValidator;
