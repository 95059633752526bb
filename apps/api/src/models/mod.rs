pub mod about;
pub mod contact;
pub mod experience;
pub mod post;
pub mod service;
pub mod technology;
