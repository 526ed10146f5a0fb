pub mod core;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod utils;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;
