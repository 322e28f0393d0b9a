pub mod paths;
pub mod patterns;
