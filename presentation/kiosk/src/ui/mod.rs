pub mod error;
pub mod error_mapper;
pub mod render;
