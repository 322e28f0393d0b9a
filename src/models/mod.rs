pub mod api;
pub mod scan;
