pub mod config;
pub mod dates;
pub mod hours;
pub mod slots;
pub mod store;
pub mod theme;
