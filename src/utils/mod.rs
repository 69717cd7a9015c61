// Utils compartidos

pub mod chat_ffi;
pub mod constants;
pub mod display;
pub mod time;

pub use constants::*;
pub use display::*;
pub use time::*;
