pub mod build;
pub mod preview;
pub mod render;
pub mod routes;
pub mod validate;
