pub mod breeding;
pub mod condition;
