mod common;

mod auth;
mod award;
mod badge;
