mod json;
mod parse;
mod xml;
