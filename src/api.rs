//! REST client for the maintenance backend.
//!
//! Every call is credentialed (session cookie) and, when a token is given,
//! carries the `X-CSRFToken` header. Failures are logged once with the
//! operation and endpoint, then handed back to the caller untouched.

use gloo_net::http::Method;
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::csrf::{parse_cookie, CookieSource, DocumentCookies};
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::Identified;
use crate::transport::{GlooTransport, HttpRequest, HttpResponse, Transport};

pub struct ApiClient<T = GlooTransport, C = DocumentCookies> {
    config: ApiConfig,
    transport: T,
    cookies: C,
}

impl ApiClient {
    /// Browser client: fetch API plus `document.cookie`.
    pub fn browser(config: ApiConfig) -> Self {
        Self::new(config, GlooTransport, DocumentCookies)
    }
}

impl<T: Transport, C: CookieSource> ApiClient<T, C> {
    pub fn new(config: ApiConfig, transport: T, cookies: C) -> Self {
        Self {
            config,
            transport,
            cookies,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Hits the priming endpoint so the backend sets the CSRF cookie, then reads it.
    pub async fn fetch_csrf_token(&self) -> Result<Option<String>, ApiError> {
        let req = HttpRequest::new(Method::GET, self.config.priming_url());
        match self.send(req).await {
            Ok(_) => Ok(self.get_csrf_token()),
            Err(e) => {
                error!("Error fetching CSRF token: {e}");
                Err(e)
            }
        }
    }

    /// Current CSRF cookie value. Re-read on every call since the backend may rotate it.
    pub fn get_csrf_token(&self) -> Option<String> {
        self.cookies
            .cookie_string()
            .and_then(|cookies| parse_cookie(&cookies, &self.config.csrf_cookie))
    }

    pub async fn fetch_data<U>(&self, endpoint: Endpoint, csrf_token: Option<&str>) -> Result<U, ApiError>
    where
        U: DeserializeOwned,
    {
        let req = self.request(Method::GET, endpoint, None, csrf_token);
        let result = match self.send(req).await {
            Ok(resp) => decode(&resp),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            error!("Error fetching {endpoint}: {e}");
        }
        result
    }

    /// PUT to the record when editing one that has an id, POST to the collection otherwise.
    pub async fn save_data<D, U>(
        &self,
        endpoint: Endpoint,
        data: &D,
        csrf_token: Option<&str>,
        is_edit: bool,
    ) -> Result<U, ApiError>
    where
        D: Identified + Serialize + ?Sized,
        U: DeserializeOwned,
    {
        let (method, id) = match data.id() {
            Some(id) if is_edit => (Method::PUT, Some(id)),
            _ => (Method::POST, None),
        };
        let result = self.save_inner(method, endpoint, id, data, csrf_token).await;
        if let Err(e) = &result {
            let verb = if is_edit { "updating" } else { "saving" };
            error!("Error {verb} {endpoint}: {e}");
        }
        result
    }

    async fn save_inner<D, U>(
        &self,
        method: Method,
        endpoint: Endpoint,
        id: Option<i64>,
        data: &D,
        csrf_token: Option<&str>,
    ) -> Result<U, ApiError>
    where
        D: Serialize + ?Sized,
        U: DeserializeOwned,
    {
        let body = serde_json::to_string(data).map_err(|e| ApiError::Encode(e.to_string()))?;
        let req = self
            .request(method, endpoint, id, csrf_token)
            .json_body(body);
        debug!("Saving to {:?} {}", req.method, req.url);
        let resp = self.send(req).await?;
        decode(&resp)
    }

    pub async fn delete_data(&self, endpoint: Endpoint, id: i64, csrf_token: Option<&str>) -> Result<(), ApiError> {
        let req = self.request(Method::DELETE, endpoint, Some(id), csrf_token);
        match self.send(req).await {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("Error deleting {endpoint}: {e}");
                Err(e)
            }
        }
    }

    fn request(&self, method: Method, endpoint: Endpoint, id: Option<i64>, csrf_token: Option<&str>) -> HttpRequest {
        let req = HttpRequest::new(method, self.config.url(endpoint, id));
        match csrf_token {
            Some(token) => req.header(&self.config.csrf_header, token),
            None => req,
        }
    }

    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport.send(req).await?.error_for_status()
    }
}

fn decode<U: DeserializeOwned>(resp: &HttpResponse) -> Result<U, ApiError> {
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}
