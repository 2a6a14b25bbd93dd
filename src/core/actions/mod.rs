//! Built-in action handlers.

mod createkeys;
mod decrypt;
mod edit;
mod encrypt;

pub use createkeys::CreateKeys;
pub use decrypt::Decrypt;
pub use edit::Edit;
pub use encrypt::Encrypt;
