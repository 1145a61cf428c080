//! GeneCrew - team profile collector with DNA sequence analysis
//!
//! This library collects structured records about team members, validates
//! each DNA sequence against the A/T/C/G alphabet, translates it through
//! the standard genetic code, and compares collected sequences by Hamming
//! distance.

pub mod app;
pub mod logging;
pub mod member;
pub mod sequence;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use member::Member;
