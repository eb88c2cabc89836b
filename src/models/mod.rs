pub mod admin;
pub mod draft;
pub mod member;
pub mod stats;
