pub mod form_card;
pub mod loading_button;
pub mod password_input;

// Re-exports for convenience
pub use form_card::*;
pub use loading_button::*;
pub use password_input::*;
