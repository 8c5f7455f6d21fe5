//! Core traits for the HTTP collaborator.

mod transport;

pub use transport::{FormParams, HttpResponse, Transport};
