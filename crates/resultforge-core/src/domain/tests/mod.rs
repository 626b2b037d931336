//! Tests for the domain model.
