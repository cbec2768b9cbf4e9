pub mod greeting;
pub mod health;

pub use greeting::greeting;
pub use health::health_check;
