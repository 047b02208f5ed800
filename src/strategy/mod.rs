pub mod eval;
pub mod filter;
pub mod input;
pub mod trace;
