pub mod builder;
pub mod dialog;
pub mod spinner;

pub use builder::*;
pub use dialog::*;
pub use spinner::*;
