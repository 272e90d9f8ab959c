//! Command-line client for the Whereami gRPC service.
//!
//! The crate is a thin wrapper around one remote method:
//! `Whereami.GetPayload` takes an empty request and returns metadata
//! about where the serving instance runs. [`driver::run`] calls it
//! `count` times and prints the request metadata, response leading
//! metadata, payload, and trailing metadata for each call.

pub mod cli;
pub mod driver;
pub mod error;
pub mod render;

pub mod whereami {
    tonic::include_proto!("whereami");
}
