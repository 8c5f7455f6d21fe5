//! Administrator API.

use std::time::Duration;

use fccloud_core::{
    AdminMetadataSetRecord, Collection, CommandRecord, Record, RecordShape, Result, ServerUrl,
    Transport,
};
use tracing::{debug, instrument};

use crate::base::ApiBase;
use crate::config::ClientConfig;
use crate::endpoints;
use crate::requests::{CUSTOM_SET_TYPE, MetadataSetDefinition, form};
use crate::transport::ReqwestTransport;

/// Operations available to a signed-in administrator.
#[derive(Debug)]
pub struct CloudAdminApi<T = ReqwestTransport> {
    base: ApiBase<T>,
}

impl CloudAdminApi<ReqwestTransport> {
    /// Connect with a [`ReqwestTransport`] built from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(config.server_url.clone(), transport))
    }
}

impl<T: Transport> CloudAdminApi<T> {
    pub fn with_transport(server_url: ServerUrl, transport: T) -> Self {
        Self {
            base: ApiBase::new(server_url, transport),
        }
    }

    pub fn server_url(&self) -> &ServerUrl {
        self.base.server_url()
    }

    pub fn transport(&self) -> &T {
        self.base.transport()
    }

    /// Wall time of the most recent request.
    pub fn last_run_time(&self) -> Duration {
        self.base.last_run_time()
    }

    #[instrument(skip(self, password), fields(server = %self.base.server_url()))]
    pub async fn admin_login(&self, user: &str, password: &str) -> Result<Option<CommandRecord>> {
        self.base
            .command(
                endpoints::ADMIN_INDEX,
                form([
                    ("op", "adminlogin"),
                    ("adminuser", user),
                    ("adminpassword", password),
                ]),
            )
            .await
    }

    /// Create a set. Only custom sets can be created, so the id is sent
    /// empty and the type is forced to custom.
    #[instrument(skip(self, definition), fields(name = %definition.name))]
    pub async fn add_metadata_set(
        &self,
        definition: &MetadataSetDefinition,
    ) -> Result<Option<CommandRecord>> {
        let definition = MetadataSetDefinition {
            id: String::new(),
            set_type: CUSTOM_SET_TYPE,
            ..definition.clone()
        };
        self.base
            .command(endpoints::ADD_METADATA_SET, definition.to_form())
            .await
    }

    #[instrument(skip(self, definition), fields(id = %definition.id))]
    pub async fn update_metadata_set(
        &self,
        definition: &MetadataSetDefinition,
    ) -> Result<Option<CommandRecord>> {
        self.base
            .command(endpoints::UPDATE_METADATA_SET, definition.to_form())
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_metadata_set(&self, set_id: &str) -> Result<Option<CommandRecord>> {
        self.base
            .command(endpoints::DELETE_METADATA_SET, form([("setid", set_id)]))
            .await
    }

    /// Set definitions matching `keyword`, paged by `start`/`end`
    /// (zero-based). The meta record carries the overall total.
    #[instrument(skip(self))]
    pub async fn get_metadata_set_definitions(
        &self,
        keyword: &str,
        start: u32,
        end: u32,
    ) -> Result<Collection> {
        let (start, end) = (start.to_string(), end.to_string());
        self.base
            .collection(
                endpoints::GET_METADATA_SET_DEFINITIONS,
                form([("keyword", keyword), ("start", start.as_str()), ("end", end.as_str())]),
                endpoints::METADATA_SET,
                RecordShape::AdminMetadataSet,
            )
            .await
    }

    /// A single set by id. The server answers an unknown id with an empty
    /// body, which is reported as `None`.
    #[instrument(skip(self))]
    pub async fn get_metadata_set(&self, set_id: &str) -> Result<Option<AdminMetadataSetRecord>> {
        let body = self
            .base
            .post(endpoints::GET_METADATA_SET, form([("setId", set_id)]))
            .await?;
        if body.trim().is_empty() {
            debug!("empty response");
            return Ok(None);
        }

        let collection = Collection::parse(
            &body,
            endpoints::METADATA_SET,
            RecordShape::AdminMetadataSet,
            None,
        )?;
        Ok(collection
            .into_records()
            .into_iter()
            .next()
            .and_then(Record::into_admin_metadata_set))
    }
}
