pub mod inspector;
pub mod resolver;
pub mod system;
