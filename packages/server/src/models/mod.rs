pub mod article;
pub mod channel;
pub mod shared;
pub mod video;
pub mod workspace;
