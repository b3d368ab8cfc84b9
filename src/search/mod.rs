pub mod executor;
pub mod prefix;
pub mod results;
pub mod suggest;
