mod check;
mod judge;
mod rays;

pub use check::*;
pub use judge::*;
pub use rays::*;
