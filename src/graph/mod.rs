pub mod artifact;
pub mod element;
pub mod process;
pub mod visualizer;

pub use artifact::*;
pub use element::*;
pub use process::*;
pub use visualizer::visualize_graph;
