// Integration tests

mod config_test;
mod verification_test;
