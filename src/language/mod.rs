// Types representing a parsed Verilog/SystemVerilog syntax tree

mod error;
mod kind;
mod types;

// Re-export all public symbols
pub use error::*;
pub use kind::*;
pub use types::*;
