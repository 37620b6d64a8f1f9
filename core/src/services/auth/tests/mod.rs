//! Tests for the authorization service

mod service_tests;
