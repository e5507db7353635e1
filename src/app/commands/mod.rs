pub mod configure;
pub mod render;
pub mod scaffold;
