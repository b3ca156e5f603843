pub mod client;
pub mod events;

pub use client::{FeedClient, FeedError};
pub use events::FeedEvent;
