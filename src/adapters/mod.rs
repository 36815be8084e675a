// Adapters layer: concrete implementations of the domain ports.

pub mod dialer;
pub mod directory;
pub mod location;

pub use dialer::ConsoleDialer;
pub use directory::{AnyDirectory, JsonFileDirectory, StaticDirectory};
pub use location::{DeniedLocationProvider, ManualLocationProvider};
