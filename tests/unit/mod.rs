/// Unit test suite root
///
/// Exercises the library layers through their public API. The modules here
/// complement the in-file tests next to each implementation.

mod engine_tests;
mod record_format_tests;
