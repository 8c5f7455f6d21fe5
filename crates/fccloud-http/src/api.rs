//! User-level API.

use std::time::Duration;

use fccloud_core::{Collection, CommandRecord, RecordShape, Result, ServerUrl, Transport};
use tracing::instrument;

use crate::base::ApiBase;
use crate::config::ClientConfig;
use crate::endpoints;
use crate::requests::{AttributeUpdate, attribute_values_form, form};
use crate::transport::ReqwestTransport;

/// Operations available to a signed-in user.
///
/// Each method is one request. A non-2xx status is returned as
/// [`TransportError::Status`](fccloud_core::TransportError::Status); a body
/// that cannot be decoded is a [`DecodeError`](fccloud_core::DecodeError).
#[derive(Debug)]
pub struct CloudApi<T = ReqwestTransport> {
    base: ApiBase<T>,
}

impl CloudApi<ReqwestTransport> {
    /// Connect with a [`ReqwestTransport`] built from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(config.server_url.clone(), transport))
    }
}

impl<T: Transport> CloudApi<T> {
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
    pub async fn login_guest(&self, user: &str, password: &str) -> Result<Option<CommandRecord>> {
        self.base
            .command(
                endpoints::LOGIN_GUEST,
                form([("userid", user), ("password", password)]),
            )
            .await
    }

    /// End the session. Session state held by the transport is dropped
    /// whatever the server answers.
    #[instrument(skip(self), fields(server = %self.base.server_url()))]
    pub async fn lock_session(&self) -> Result<Option<CommandRecord>> {
        let result = self.base.command(endpoints::LOCK_SESSION, Vec::new()).await;
        self.base.transport().clear_session();
        result
    }

    /// Raw metadata feature information. The body is returned undecoded.
    #[instrument(skip(self))]
    pub async fn get_metadata_info(&self) -> Result<String> {
        self.base.post(endpoints::GET_METADATA_INFO, Vec::new()).await
    }

    /// Metadata sets that may be bound to the file object at `full_path`.
    #[instrument(skip(self))]
    pub async fn get_available_metadata_sets(&self, full_path: &str) -> Result<Collection> {
        self.base
            .collection(
                endpoints::GET_AVAILABLE_METADATA_SETS,
                form([("fullpath", full_path)]),
                endpoints::METADATA_SET,
                RecordShape::MetadataSet,
            )
            .await
    }

    /// Metadata values bound to the file object at `full_path`, one record
    /// per set.
    #[instrument(skip(self))]
    pub async fn get_metadata_values(&self, full_path: &str) -> Result<Collection> {
        self.base
            .collection(
                endpoints::GET_METADATA_VALUES,
                form([("fullpath", full_path)]),
                endpoints::METADATA_SET_VALUE,
                RecordShape::MetadataValue,
            )
            .await
    }

    /// Metadata sets usable as search criteria under `full_path`.
    #[instrument(skip(self))]
    pub async fn get_metadata_sets_for_search(&self, full_path: &str) -> Result<Collection> {
        self.base
            .collection(
                endpoints::GET_METADATA_SETS_FOR_SEARCH,
                form([("fullpath", full_path)]),
                endpoints::METADATA_SET,
                RecordShape::AdminMetadataSet,
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn add_set_to_file_object(
        &self,
        full_path: &str,
        set_id: &str,
    ) -> Result<Option<CommandRecord>> {
        self.base
            .command(
                endpoints::ADD_SET_TO_FILE_OBJECT,
                form([("fullpath", full_path), ("setid", set_id)]),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_set_from_file_object(
        &self,
        full_path: &str,
        set_id: &str,
    ) -> Result<Option<CommandRecord>> {
        self.base
            .command(
                endpoints::REMOVE_SET_FROM_FILE_OBJECT,
                form([("fullpath", full_path), ("setid", set_id)]),
            )
            .await
    }

    /// Store new values for attributes of set `set_id` on `full_path`.
    #[instrument(skip(self, updates), fields(updates = updates.len()))]
    pub async fn save_attribute_values(
        &self,
        full_path: &str,
        set_id: &str,
        updates: &[AttributeUpdate],
    ) -> Result<Option<CommandRecord>> {
        self.base
            .command(
                endpoints::SAVE_ATTRIBUTE_VALUES,
                attribute_values_form(full_path, set_id, updates),
            )
            .await
    }
}
