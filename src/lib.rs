pub mod compare;
pub mod errors;
pub mod extract;
pub mod runner;
pub mod seq;
pub mod subsample;
