pub mod car_class;
pub mod catalog;
pub mod company;
pub mod rule;
pub mod time_window;
