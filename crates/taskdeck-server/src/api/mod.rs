pub mod auth;
pub mod health;
pub mod helpers;
pub mod profile;
pub mod tasks;
