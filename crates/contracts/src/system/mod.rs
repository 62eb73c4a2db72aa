pub mod audit;
pub mod auth;
pub mod languages;
pub mod users;
