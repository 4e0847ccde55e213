//! Unit tests for the HTTP facade.
//!
//! Route behaviour is exercised end to end through the router with the
//! in-memory gateway adapter; no live platform connection is required.

mod routes_tests;
