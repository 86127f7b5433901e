pub mod ascii;
pub mod cache;
