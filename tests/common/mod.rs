// Common test utilities

#[cfg(test)]
#[allow(dead_code)]
pub mod fixtures;
#[cfg(test)]
#[allow(dead_code)]
pub mod terminal;
#[cfg(test)]
#[allow(dead_code)]
pub mod tracing;
