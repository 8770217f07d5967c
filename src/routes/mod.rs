pub mod health;
pub mod workout;
