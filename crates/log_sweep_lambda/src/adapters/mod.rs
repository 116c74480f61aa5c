pub mod function_registry;
pub mod log_registry;
