//! Desktop crate facade exposing the iced-based installer window to the wider workspace.

mod app;
mod telemetry;

pub use app::{run, DesktopOptions};
