pub mod debug_view;
pub mod lanczos;
pub mod passthrough;
pub mod vertex;
