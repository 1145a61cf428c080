pub mod codon;
pub mod comparison;
pub mod translation;
pub mod validation;

pub use codon::*;
pub use comparison::*;
pub use translation::*;
pub use validation::*;
