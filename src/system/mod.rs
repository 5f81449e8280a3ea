pub mod config;
pub mod host;
pub mod time;

#[cfg(test)]
pub(crate) mod mock;
