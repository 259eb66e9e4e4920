//! Data module - CSV loading and benchmark tables

mod loader;
mod tables;

pub use loader::{DataLoader, LoaderError};
pub use tables::{SpeedupTable, TimingTable};
