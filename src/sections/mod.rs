pub mod about;
pub mod blog;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod portfolio;
