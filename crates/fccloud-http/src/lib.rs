//! fccloud-http - FileCloud API client over reqwest.
//!
//! [`CloudApi`] covers user operations, [`CloudAdminApi`] administrator
//! operations. Both decode responses with [`fccloud_core`] and are generic
//! over the [`Transport`](fccloud_core::Transport) they send requests with.
//!
//! ```no_run
//! use fccloud_core::ServerUrl;
//! use fccloud_http::{ClientConfig, CloudApi};
//!
//! # async fn run() -> fccloud_core::Result<()> {
//! let config = ClientConfig::new(ServerUrl::new("https://files.example.com")?);
//! let api = CloudApi::new(&config)?;
//! api.login_guest("jdoe", "secret").await?;
//! let sets = api.get_available_metadata_sets("/jdoe/report.pdf").await?;
//! println!("{} sets", sets.number_of_records());
//! # Ok(())
//! # }
//! ```

mod admin;
mod api;
mod base;
pub mod config;
pub mod endpoints;
pub mod requests;
pub mod transport;

pub use admin::CloudAdminApi;
pub use api::CloudApi;
pub use config::ClientConfig;
pub use requests::{AttributeUpdate, MetadataSetDefinition};
pub use transport::ReqwestTransport;
