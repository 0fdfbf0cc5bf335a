//! Overflow-aware building blocks shared by both numeric domains.

mod checked;
mod factorial;
mod gcd;

pub use checked::Checked;
pub use factorial::factorial;
pub use gcd::gcd;
