//! HTTP layer - wire DTOs, envelope decoding and the REST client

pub mod client;
pub mod dto;
pub mod mapper;
pub mod transport;

pub use client::HttpConsoleClient;
pub use transport::RestTransport;
