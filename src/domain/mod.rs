pub mod day_window;
pub mod forecast;
pub mod units;
