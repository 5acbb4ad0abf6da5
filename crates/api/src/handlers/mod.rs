pub mod cities;
pub mod health;
