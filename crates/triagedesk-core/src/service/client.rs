//! HTTP client for the classification service.
//!
//! Every operation is a single request: no retry, backoff, caching or
//! idempotency handling. Failures surface as [`Error::Http`] (transport),
//! [`Error::Status`] (non-success status) or [`Error::Serde`] (unexpected body).

use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::email::{ClassifiedEmail, EmailId, EmailUpdate, HealthStatus, NewEmail};
use crate::error::{Error, Result};

/// Default address of a locally running classification service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client for the classification/storage REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL, always ending in `/` so relative joins keep any path prefix.
    base_url: Url,
    /// HTTP client.
    http: Client,
}

impl ApiClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            http: Client::new(),
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Submits a raw email for classification (`POST emails/classify`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service answers with an error status.
    pub async fn classify(&self, email: &NewEmail) -> Result<ClassifiedEmail> {
        self.send(Method::POST, "emails/classify", Some(email)).await
    }

    /// Fetches every classified email (`GET emails`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service answers with an error status.
    pub async fn list(&self) -> Result<Vec<ClassifiedEmail>> {
        self.send::<(), _>(Method::GET, "emails", None).await
    }

    /// Updates the mutable fields of one email (`PUT emails/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service answers with an error status.
    pub async fn update(&self, id: EmailId, update: &EmailUpdate) -> Result<ClassifiedEmail> {
        let path = format!("emails/{id}");
        self.send(Method::PUT, &path, Some(update)).await
    }

    /// Checks service liveness (`GET health/ping`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service answers with an error status.
    pub async fn ping(&self) -> Result<HealthStatus> {
        self.send::<(), _>(Method::GET, "health/ping", None).await
    }

    /// Resolves `path` against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::InvalidUrl(format!("{path}: {e}")))
    }

    /// Issues one request and decodes the JSON response.
    async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("{} {}", method, url);

        let mut request = self.http.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.inspect_err(|e| {
            warn!("{} {} failed: {}", method, path, e);
        })?;

        let response = check_status(response).await.inspect_err(|e| {
            warn!("{} {} rejected: {}", method, path, e);
        })?;

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Turns a non-success response into [`Error::Status`].
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Status {
        status: status.as_u16(),
        body,
    })
}

/// Parses a base URL and makes sure its path ends with `/`.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|e| Error::InvalidUrl(format!("{trimmed}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!(
            "{trimmed}: unsupported scheme {}",
            url.scheme()
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_endpoints_keep_path_prefix() {
        let client = ApiClient::new("https://api.example.com/v1").unwrap();
        assert_eq!(
            client.endpoint("emails/classify").unwrap().as_str(),
            "https://api.example.com/v1/emails/classify"
        );
        assert_eq!(
            client.endpoint(&format!("emails/{}", EmailId::new(42))).unwrap().as_str(),
            "https://api.example.com/v1/emails/42"
        );
    }

    #[test]
    fn test_query_and_fragment_are_dropped() {
        let client = ApiClient::new(" http://localhost:8000/api/?x=1#top ").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/api/");
    }

    #[test]
    fn test_invalid_urls_are_rejected() {
        assert!(matches!(
            ApiClient::new("localhost:8000"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            ApiClient::new("ftp://files.example.com"),
            Err(Error::InvalidUrl(_))
        ));
    }
}
