pub mod color;
pub mod slot;
pub mod store_settings;
pub mod theme;
pub mod weekday;
pub mod working_hours;
