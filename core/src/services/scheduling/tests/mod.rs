//! Tests for the scheduling coordinator
