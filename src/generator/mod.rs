//! Derived views of a track log: parsed positions and GPX export

pub mod gpx;
pub mod position;
pub mod tracker;

#[cfg(test)]
mod tests;
