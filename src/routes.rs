pub mod health;
pub mod number;
pub mod root;
