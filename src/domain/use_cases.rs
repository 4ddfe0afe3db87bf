pub mod contact;
pub mod content;
pub mod profile;
pub mod projects;
pub mod setup;
