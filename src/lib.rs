//! Column-aligning code formatter for Verilog and SystemVerilog.
//!
//! The formatter consumes a syntax tree produced by an external parser
//! (supplied as a JSON document) and re-renders the source with ports,
//! signal declarations, parameters, instantiations and continuous assigns
//! aligned at configured columns. When no tree is available a line-oriented
//! regex aligner applies the same column contract to the raw text.

pub mod config;
pub mod fallback;
pub mod formatting;
pub mod language;
pub mod parsing;
pub mod regex;
