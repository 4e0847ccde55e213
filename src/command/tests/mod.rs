//! Unit tests for the command module.
//!
//! Tests are organised by service, covering the load-time skip-and-warn
//! policy, the dispatch error-notice contract, and command publication.

mod deploy_tests;
mod dispatcher_tests;
mod metadata_tests;
