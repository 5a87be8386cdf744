pub mod form;
pub mod generation;

pub use form::*;
pub use generation::*;
