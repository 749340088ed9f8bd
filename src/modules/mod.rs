pub mod content;
pub mod home;
