//! Shared test harness: mock backends, config builder, server wrapper

#![allow(dead_code)]

pub mod config;
pub mod mock_pinata;
pub mod server;
