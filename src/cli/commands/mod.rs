pub mod color;
pub mod config;
pub mod dates;
pub mod hours;
pub mod init;
pub mod slots;
pub mod theme;
