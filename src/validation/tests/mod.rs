//! Unit tests for batch-path validation and import.

mod validator_tests;
