//! Shared fixtures for the end-to-end tests
//!
//! Each test binary uses a different subset.

#![allow(dead_code)]

pub mod config;
pub mod flaky_proxy;
pub mod logs;
pub mod mock_backend;
pub mod partial_body;
pub mod server;
