pub use board::*;
pub use record::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod record;
mod visualization;
