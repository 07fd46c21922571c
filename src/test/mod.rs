mod loader;
mod location_driver;
mod monitor;
