//! Tests for the token codec

mod codec_tests;
