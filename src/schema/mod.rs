//! Plain data records shared by the generators and the store.

pub mod dialogue;
pub mod story;
pub mod vocabulary;
