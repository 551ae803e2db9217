//! Property-based tests

mod balance_tests;
mod export_tests;
mod reveal_tests;
mod roster_tests;
mod search_tests;
mod tracing_tests;
