pub mod builder;
pub mod coerce;
pub mod source;
