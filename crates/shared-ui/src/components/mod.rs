// Standalone components (no primitives)
pub mod button;
pub mod form;
pub mod form_select;
pub mod input;
pub mod textarea;

// Primitive wrappers
pub mod toast;

// Re-exports for convenience
pub use button::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use textarea::*;
pub use toast::*;
