pub mod services;
pub mod slots;
