//! Configuration and path management

pub mod paths;

pub use paths::SpendbookPaths;
