/// Blocking Katello REST client implementing [`ContentViewApi`].
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::client::ContentViewApi;
use super::errors::ApiError;
use super::model::{Definition, Labeled, UpdateViewsBody, View, ViewId};

/// Connection settings for [`HttpApi`].
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Server base URL, e.g. `https://katello.example.com/katello`.
    pub server: Url,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Accept invalid TLS certificates (self-signed lab servers).
    pub insecure: bool,
}

impl HttpConfig {
    /// Parse the server URL and collect the remaining settings.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Url` if `server` is not an absolute http(s) URL.
    pub fn new(
        server: &str,
        username: Option<String>,
        password: Option<String>,
        insecure: bool,
    ) -> Result<Self, ApiError> {
        let url = Url::parse(server).map_err(|e| ApiError::Url(format!("{server}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ApiError::Url(format!(
                "{server}: expected an http:// or https:// server URL"
            )));
        }
        Ok(Self {
            server: url,
            username,
            password,
            insecure,
        })
    }
}

/// HTTP implementation of the content view API.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    config: HttpConfig,
}

impl HttpApi {
    /// Build the underlying HTTP client. No request is made here.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the TLS backend cannot be initialized.
    pub fn new(config: HttpConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("cvdcli/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(config.insecure)
            .build()?;
        Ok(Self { client, config })
    }

    /// Join `segments` onto the server's `/api` root, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        endpoint(&self.config.server, segments)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.username {
            Some(user) => request.basic_auth(user, self.config.password.as_deref()),
            None => request,
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let response = self.authorize(self.client.get(url.clone())).send()?;
        let response = check_status(response, &url)?;
        response.json::<T>().map_err(|e| ApiError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    /// Fetch a label-filtered collection and pick the entry carrying `label`.
    ///
    /// The query filter is not trusted: entries with another label are
    /// ignored, and more than one exact match is an error.
    fn find_first<T: DeserializeOwned + Labeled>(
        &self,
        mut url: Url,
        label: &str,
    ) -> Result<Option<T>, ApiError> {
        url.query_pairs_mut().append_pair("label", label);
        let found: Vec<T> = self.get_json(url.clone())?;
        single_with_label(found, label, &url)
    }
}

fn single_with_label<T: Labeled>(
    found: Vec<T>,
    label: &str,
    url: &Url,
) -> Result<Option<T>, ApiError> {
    let mut matching: Vec<T> = found.into_iter().filter(|item| item.label() == label).collect();
    match matching.len() {
        0 | 1 => Ok(matching.pop()),
        count => Err(ApiError::Ambiguous {
            url: url.to_string(),
            label: label.to_owned(),
            count,
        }),
    }
}

fn endpoint(server: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = server.clone();
    url.path_segments_mut()
        .map_err(|()| ApiError::Url(format!("{server}: cannot be a base URL")))?
        .pop_if_empty()
        .push("api")
        .extend(segments);
    Ok(url)
}

fn check_status(response: Response, url: &Url) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        url: url.to_string(),
        body,
    })
}

impl ContentViewApi for HttpApi {
    fn find_definition(&self, org: &str, label: &str) -> Result<Option<Definition>, ApiError> {
        let url = self.endpoint(&["organizations", org, "content_view_definitions", ""])?;
        self.find_first(url, label)
    }

    fn find_view(&self, org: &str, label: &str) -> Result<Option<View>, ApiError> {
        let url = self.endpoint(&["organizations", org, "content_views", ""])?;
        self.find_first(url, label)
    }

    fn list_views(&self, definition_id: u64) -> Result<Vec<View>, ApiError> {
        let id = definition_id.to_string();
        let url = self.endpoint(&["content_view_definitions", &id, "content_views"])?;
        self.get_json(url)
    }

    fn update_views(&self, definition_id: u64, views: &[ViewId]) -> Result<(), ApiError> {
        let id = definition_id.to_string();
        let url = self.endpoint(&["content_view_definitions", &id, "content_views"])?;
        debug!(%url, ?views, "PUT");
        let response = self
            .authorize(self.client.put(url.clone()))
            .json(&UpdateViewsBody { views })
            .send()?;
        check_status(response, &url)?;
        Ok(())
    }
}
