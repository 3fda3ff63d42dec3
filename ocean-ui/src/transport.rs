//! Browser `fetch` transport via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;
use ocean::{HttpRequest, HttpResponse, Method, Transport};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let sent = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| format!("Request failed: {e}"))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| format!("Request failed: {e}"))?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response
            .binary()
            .await
            .map_err(|e| format!("Failed to read response body: {e}"))?;

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
