//! Integration tests

mod config_store_tests;
mod divide_workflow_tests;
mod reveal_driver_tests;
