pub mod award;
pub mod badge;
pub mod person;
pub mod project;
