pub mod image;
pub mod slug;
