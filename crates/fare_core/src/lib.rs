pub mod clock;
pub mod config;
pub mod fare;
pub mod geometry;
pub mod quote;
pub mod rates;
pub mod surge;
pub mod trip;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
