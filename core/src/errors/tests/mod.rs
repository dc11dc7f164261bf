//! Error type tests

mod domain_error_tests;
