// region:    --- Modules

mod error;
mod extract;

pub use error::*;
pub use extract::*;

// endregion: --- Modules
