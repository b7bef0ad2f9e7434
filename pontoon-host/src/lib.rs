//! Host application: owns the counter state and consumes the remote
//! `Counter` component behind a deferred-loading boundary.

pub mod app;
pub mod config;
pub mod runtime;
pub mod surface;
