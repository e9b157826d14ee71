mod ext;
mod status_code;

pub use ext::*;
pub use status_code::*;
