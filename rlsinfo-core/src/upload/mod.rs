//! Screenshot upload to image hosts.
//!
//! The host is chosen once per run through the closed `ImageHost` enum; the
//! `ImageUploader` trait keeps the rest of the crate independent of HTTP.
mod abstraction;
mod http;

pub use abstraction::{HostCredentials, ImageHost, ImageUploader};
pub use http::{HttpUploader, parse_hdbimg_response, parse_imgbb_response, parse_ptpimg_response};
