pub mod correction;
pub mod planner;
pub mod request;
