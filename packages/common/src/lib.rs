pub mod config;
pub mod id;
pub mod records;
pub mod seed;
pub mod store;

pub use records::{Article, Channel, Record, Video, VideoStatus, Workspace};
