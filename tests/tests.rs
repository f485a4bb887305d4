#[cfg(feature = "server")]
mod controller;

#[cfg(feature = "server")]
mod telemetry;

#[cfg(feature = "server")]
mod util;
