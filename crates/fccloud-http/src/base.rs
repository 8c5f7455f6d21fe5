//! Request plumbing shared by the user and admin APIs.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use fccloud_core::{
    Collection, CommandRecord, FormParams, Record, RecordShape, Result, ServerUrl, Transport,
    TransportError,
};
use tracing::{debug, trace};

use crate::endpoints::{COMMAND, META};

#[derive(Debug)]
pub(crate) struct ApiBase<T> {
    transport: T,
    server_url: ServerUrl,
    last_run: Mutex<Duration>,
}

impl<T: Transport> ApiBase<T> {
    pub(crate) fn new(server_url: ServerUrl, transport: T) -> Self {
        Self {
            transport,
            server_url,
            last_run: Mutex::new(Duration::ZERO),
        }
    }

    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) fn server_url(&self) -> &ServerUrl {
        &self.server_url
    }

    pub(crate) fn last_run_time(&self) -> Duration {
        *self.last_run.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// POST `form` to `path` and return the body of a 2xx response.
    pub(crate) async fn post(&self, path: &str, form: FormParams) -> Result<String> {
        let url = self.server_url.endpoint(path);
        debug!(path, "request");

        let started = Instant::now();
        let result = self.transport.post(&url, &form).await;
        let elapsed = started.elapsed();
        *self.last_run.lock().unwrap_or_else(PoisonError::into_inner) = elapsed;

        let response = result?;
        trace!(status = response.status, elapsed_ms = elapsed.as_millis() as u64, "response");
        if !response.is_success() {
            return Err(TransportError::Status {
                status: response.status,
                body: response.body,
            }
            .into());
        }
        Ok(response.body)
    }

    /// POST and decode the first `<command>` element, if any.
    pub(crate) async fn command(
        &self,
        path: &str,
        form: FormParams,
    ) -> Result<Option<CommandRecord>> {
        let body = self.post(path, form).await?;
        let collection = Collection::parse(&body, COMMAND, RecordShape::Command, None)?;
        Ok(collection
            .into_records()
            .into_iter()
            .next()
            .and_then(Record::into_command))
    }

    /// POST and decode every `record_name` element plus the meta element.
    pub(crate) async fn collection(
        &self,
        path: &str,
        form: FormParams,
        record_name: &str,
        shape: RecordShape,
    ) -> Result<Collection> {
        let body = self.post(path, form).await?;
        Ok(Collection::parse(&body, record_name, shape, Some(META))?)
    }
}
