//! Command-line front end for the isotime parser.

pub mod render;
