pub mod cases;
pub mod not_found;
pub mod section;
