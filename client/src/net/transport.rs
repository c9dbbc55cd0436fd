//! `gloo-net` implementation of [`session::Transport`].
//!
//! Requests go out with `credentials: include` so the refresh cookie, when
//! the backend uses one, rides along. Outside the browser every send fails.

use session::{ApiRequest, ApiResponse, Transport, TransportError};

#[derive(Clone, Debug)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::{Request, RequestBuilder};
            use session::Method;

            let url = request.url(&self.base_url);
            let builder: RequestBuilder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Patch => Request::patch(&url),
                Method::Delete => Request::delete(&url),
            };
            let mut builder = builder
                .credentials(web_sys::RequestCredentials::Include)
                .query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match &request.body {
                Some(body) => builder.body(body.to_string()),
                None => builder.build(),
            }
            .map_err(|e| TransportError::new(e.to_string()))?;

            let response = prepared.send().await.map_err(|e| TransportError::new(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| TransportError::new(e.to_string()))?;
            Ok(ApiResponse::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, &self.base_url);
            Err(TransportError::new("not available outside the browser"))
        }
    }
}
