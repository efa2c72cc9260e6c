pub mod error;
pub mod quote;
pub mod tariff;

pub mod json;
