pub mod generate;
pub mod util;
pub mod validate;

pub use generate::*;
pub use util::*;
pub use validate::*;
