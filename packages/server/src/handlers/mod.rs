pub mod admin;
pub mod auth;
pub mod award;
pub mod badge;
pub mod og;
pub mod pages;
