//! Shared helpers for API tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use fccloud_core::{HttpResponse, Result, ServerUrl, Transport};

pub const SERVER: &str = "https://files.example.com";

pub fn server_url() -> ServerUrl {
    ServerUrl::new(SERVER).unwrap()
}

/// One request as the API issued it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sent {
    pub method: &'static str,
    pub url: String,
    pub form: Vec<(String, String)>,
}

impl Sent {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> Vec<&str> {
        self.form.iter().map(|(k, _)| k.as_str()).collect()
    }
}

/// Records every request and answers with queued responses.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    sent: Mutex<Vec<Sent>>,
    cleared: Mutex<u32>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response.
    pub fn respond(self, body: &str) -> Self {
        self.respond_with(HttpResponse::new(200, body))
    }

    pub fn respond_with(self, response: HttpResponse) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> Sent {
        self.sent().pop().expect("no request sent")
    }

    pub fn cleared(&self) -> u32 {
        *self.cleared.lock().unwrap()
    }

    fn next(&self, sent: Sent) -> Result<HttpResponse> {
        self.sent.lock().unwrap().push(sent);
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no response queued"))
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.next(Sent {
            method: "GET",
            url: url.to_string(),
            form: Vec::new(),
        })
    }

    async fn post(&self, url: &str, form: &[(String, String)]) -> Result<HttpResponse> {
        self.next(Sent {
            method: "POST",
            url: url.to_string(),
            form: form.to_vec(),
        })
    }

    fn clear_session(&self) {
        *self.cleared.lock().unwrap() += 1;
    }
}

pub fn command_xml(command_type: &str, result: &str, message: &str) -> String {
    format!(
        "<commands><command><type>{command_type}</type><result>{result}</result>\
         <message>{message}</message></command></commands>"
    )
}
