pub mod filter;
pub mod options;
pub mod queries;
pub mod types;
mod validation;

pub use self::filter::{MemberFilter, MemberListQuery, SortDir, SortSpec};
pub use self::queries::*;
pub use self::types::*;
