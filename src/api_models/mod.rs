pub mod history;
pub mod price;
