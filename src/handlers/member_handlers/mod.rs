pub mod export;
pub mod list;
pub mod read;
pub mod status;
pub mod update;
