//! Library integration tests

mod library_tests;
