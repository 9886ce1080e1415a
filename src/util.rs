/// Numeric helpers.
///
/// This module turns literal and input text into `i64` values and applies the
/// five arithmetic operators with explicit checks, so that overflow and
/// division by zero surface as runtime errors instead of panics.
///
/// All functions return a `Result`, which is `Ok` if the value or operation is
/// valid and an error naming the source line otherwise.
pub mod num;
