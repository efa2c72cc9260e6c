pub mod breakdown;
pub mod calculator;
pub mod request;
pub mod select;
