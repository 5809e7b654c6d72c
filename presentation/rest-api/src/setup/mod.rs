pub mod dependency_injection;
pub mod server;
pub mod shutdown;

#[cfg(test)]
pub mod test_support;
