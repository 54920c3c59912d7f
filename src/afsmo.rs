//! The boundary with the external airfoil smoothing program: its configuration, the fixed format
//! input file it reads, the output files it leaves behind, and the pipeline tying them together.

pub mod config;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod runner;
