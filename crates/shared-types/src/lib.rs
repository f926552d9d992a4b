pub mod contact;
pub mod error;
pub mod feature_flags;
pub mod form;
pub mod validation;

pub use contact::*;
pub use error::*;
pub use feature_flags::*;
pub use form::*;
pub use validation::{FieldError, FieldErrors};
