pub mod buttons;
pub mod config;
pub mod inject;
pub mod params;
pub mod url;
