pub mod error;
pub mod money;
pub mod rate;
pub mod terms;
