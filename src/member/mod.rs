pub mod export;
pub mod record;

pub use export::*;
pub use record::*;
