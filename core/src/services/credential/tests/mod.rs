//! Tests for credential verification
