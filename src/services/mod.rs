pub mod close;
pub mod history;
pub mod trading_day;
pub mod yahoo;
