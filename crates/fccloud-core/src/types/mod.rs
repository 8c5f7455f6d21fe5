//! Validated value types shared by the decoder and the client.

mod server_url;

pub use server_url::ServerUrl;
