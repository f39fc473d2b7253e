//! Input handling: reading resume and job description text

pub mod manager;

pub use manager::InputManager;
