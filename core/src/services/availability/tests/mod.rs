//! Tests for the availability ledger
