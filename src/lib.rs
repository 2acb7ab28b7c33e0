mod digits;
mod error;
mod gcd;
mod ord;
mod root;

pub use digits::next_bigger_with_same_digits;
pub use error::{Error, Result};
pub use gcd::GcdStrategy;
pub use ord::descending;
pub use root::nth_root;
