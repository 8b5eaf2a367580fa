//! HTTP seam between the API client and the browser fetch API.

use async_trait::async_trait;
use gloo_net::http::{Method, RequestBuilder};
use web_sys::RequestCredentials;

use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Serialized JSON payload.
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn json_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-2xx response into [`ApiError::Status`].
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.ok() {
            Ok(self)
        } else {
            Err(ApiError::Status {
                status: self.status,
                status_text: self.status_text,
                body: self.body,
            })
        }
    }
}

#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser fetch through `gloo-net`; cookies always travel with the request.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let json = request.body.is_some() && request.header_value("Content-Type").is_none();
        let mut builder = RequestBuilder::new(&request.url)
            .method(request.method)
            .credentials(RequestCredentials::Include);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if json {
            builder = builder.header("Content-Type", "application/json");
        }

        let req = match request.body {
            Some(body) => builder.body(body)?,
            None => builder.build()?,
        };

        let resp = req.send().await?;
        Ok(HttpResponse {
            status: resp.status(),
            status_text: resp.status_text(),
            body: resp.text().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_ignores_case() {
        let req = HttpRequest::new(Method::GET, "http://x/api/tasks/").header("X-CSRFToken", "t");
        assert_eq!(req.header_value("x-csrftoken"), Some("t"));
        assert_eq!(req.header_value("Content-Type"), None);
    }

    #[test]
    fn non_2xx_becomes_status_error() {
        let resp = HttpResponse {
            status: 403,
            status_text: "Forbidden".into(),
            body: r#"{"detail":"CSRF Failed"}"#.into(),
        };
        let err = resp.error_for_status().unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.to_string(), "HTTP 403 Forbidden");
    }

    #[test]
    fn no_content_is_ok() {
        let resp = HttpResponse {
            status: 204,
            status_text: "No Content".into(),
            body: String::new(),
        };
        assert!(resp.error_for_status().is_ok());
    }
}
