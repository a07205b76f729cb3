pub mod auth;
pub mod award;
pub mod badge;
pub mod brief;
pub mod suggestions;
