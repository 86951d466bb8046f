pub mod cases;
pub mod health;

pub use cases::{generate_case, preflight};
pub use health::health_check;
