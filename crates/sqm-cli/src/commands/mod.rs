pub mod add;
pub mod clear;
pub mod dispatch;
pub mod dump;
pub mod export;
pub mod import;
pub mod list;
pub mod schema;
pub mod shared;
pub mod status;
pub mod types;
pub mod watch;
