pub mod contact;
pub mod content;
pub mod education;
pub mod envelope;
pub mod project;
pub mod skill;
pub mod user;
