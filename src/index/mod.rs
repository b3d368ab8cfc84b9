pub mod generation;
pub mod posting;
pub mod store;
pub mod writer;
