// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Implements the common features of all gRPC-based clients.

mod from_status;
mod status;

use crate::options::ClientConfig;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};
use tracing::Instrument;

pub use from_status::to_gax_error;

#[doc(hidden)]
pub type InnerClient = tonic::client::Grpc<tonic::transport::Channel>;

/// A unary gRPC client shared by all the stubs of a client library.
///
/// The underlying channel connects lazily, on the first request, and is
/// reused (and reconnected as needed) by all the requests.
#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct Client {
    inner: InnerClient,
    headers: HeaderMap,
    tracing: bool,
}

impl Client {
    /// Create a new client.
    ///
    /// This performs no I/O, but must be called from within a Tokio runtime.
    pub async fn new(
        config: ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let tracing = crate::options::tracing_enabled(&config);
        let headers = Self::make_static_headers(&config.headers)?;
        let inner = Self::make_inner(config.endpoint, default_endpoint)?;
        Ok(Self {
            inner,
            headers,
            tracing,
        })
    }

    /// Sends a request.
    pub async fn execute<Request, Response>(
        &self,
        method: tonic::GrpcMethod<'static>,
        path: http::uri::PathAndQuery,
        request: Request,
        options: gax::options::RequestOptions,
        api_client_header: &'static str,
        request_params: &str,
    ) -> Result<Response>
    where
        Request: prost::Message + Send + Sync + 'static,
        Response: prost::Message + Default + Send + Sync + 'static,
    {
        let headers = self.make_headers(api_client_header, request_params, &options)?;
        let mut inner = self.inner.clone();
        if !self.tracing {
            return Self::request_attempt(&mut inner, method, path, request, &options, headers)
                .await;
        }
        let span = tracing::info_span!(
            "grpc.request",
            rpc.system = "grpc",
            rpc.service = method.service(),
            rpc.method = method.method(),
            rpc.grpc.status_code = tracing::field::Empty,
        );
        let result = Self::request_attempt(&mut inner, method, path, request, &options, headers)
            .instrument(span.clone())
            .await;
        if let Err(e) = &result {
            if let Some(status) = e.status() {
                span.record("rpc.grpc.status_code", status.code.name());
            }
            tracing::debug!(parent: &span, error = %e, "gRPC request failed");
        }
        result
    }

    /// Makes a single request attempt.
    async fn request_attempt<Request, Response>(
        inner: &mut InnerClient,
        method: tonic::GrpcMethod<'static>,
        path: http::uri::PathAndQuery,
        request: Request,
        options: &gax::options::RequestOptions,
        headers: HeaderMap,
    ) -> Result<Response>
    where
        Request: prost::Message + Send + Sync + 'static,
        Response: prost::Message + Default + Send + Sync + 'static,
    {
        let mut extensions = tonic::Extensions::new();
        extensions.insert(method);
        let metadata = tonic::metadata::MetadataMap::from_headers(headers);
        let mut request = tonic::Request::from_parts(metadata, extensions, request);
        if let Some(timeout) = options.attempt_timeout() {
            request.set_timeout(*timeout);
        }
        let codec = tonic_prost::ProstCodec::<Request, Response>::default();
        inner.ready().await.map_err(Error::connect)?;
        let response = inner
            .unary(request, path, codec)
            .await
            .map_err(to_gax_error)?;
        Ok(response.into_inner())
    }

    fn make_inner(
        endpoint: Option<String>,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<InnerClient> {
        use tonic::transport::{ClientTlsConfig, Endpoint};
        let endpoint = endpoint.unwrap_or_else(|| default_endpoint.to_string());
        let secure = endpoint.starts_with("https:");
        let mut endpoint = Endpoint::from_shared(endpoint).map_err(BuilderError::config)?;
        if secure {
            endpoint = endpoint
                .tls_config(ClientTlsConfig::new().with_native_roots())
                .map_err(BuilderError::transport)?;
        }
        Ok(tonic::client::Grpc::new(endpoint.connect_lazy()))
    }

    fn make_static_headers(headers: &[(String, String)]) -> gax::client_builder::Result<HeaderMap> {
        let mut map = HeaderMap::new();
        for (k, v) in headers {
            let name = HeaderName::from_bytes(k.to_lowercase().as_bytes())
                .map_err(BuilderError::config)?;
            let value = HeaderValue::from_str(v).map_err(BuilderError::config)?;
            map.append(name, value);
        }
        Ok(map)
    }

    fn make_headers(
        &self,
        api_client_header: &'static str,
        request_params: &str,
        options: &gax::options::RequestOptions,
    ) -> Result<HeaderMap> {
        let mut headers = self.headers.clone();
        headers.append(
            HeaderName::from_static("x-goog-api-client"),
            HeaderValue::from_static(api_client_header),
        );
        if !request_params.is_empty() {
            headers.append(
                HeaderName::from_static("x-goog-request-params"),
                HeaderValue::from_str(request_params).map_err(Error::ser)?,
            );
        }
        if let Some(user_agent) = options.user_agent() {
            headers.append(
                http::header::USER_AGENT,
                HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::options::RequestOptions;
    use test_case::test_case;

    const DEFAULT_ENDPOINT: &str = "https://aiplatform.googleapis.com";

    async fn test_client(config: ClientConfig) -> anyhow::Result<Client> {
        Ok(Client::new(config, DEFAULT_ENDPOINT).await?)
    }

    #[tokio::test]
    async fn default_endpoint() -> anyhow::Result<()> {
        let _client = test_client(ClientConfig::default()).await?;
        Ok(())
    }

    #[test_case("http://localhost:8080")]
    #[test_case("https://us-central1-aiplatform.googleapis.com")]
    #[tokio::test]
    async fn custom_endpoint(endpoint: &str) -> anyhow::Result<()> {
        let config = ClientConfig {
            endpoint: Some(endpoint.to_string()),
            ..Default::default()
        };
        let _client = test_client(config).await?;
        Ok(())
    }

    #[tokio::test]
    async fn bad_endpoint() {
        let config = ClientConfig {
            endpoint: Some("not a valid uri".to_string()),
            ..Default::default()
        };
        let err = Client::new(config, DEFAULT_ENDPOINT)
            .await
            .expect_err("invalid endpoints should fail");
        assert!(err.is_config(), "{err:?}");
    }

    #[tokio::test]
    async fn bad_header() {
        let config = ClientConfig {
            headers: vec![("bad header".to_string(), "value".to_string())],
            ..Default::default()
        };
        let err = Client::new(config, DEFAULT_ENDPOINT)
            .await
            .expect_err("invalid header names should fail");
        assert!(err.is_config(), "{err:?}");
    }

    #[tokio::test]
    async fn headers() -> anyhow::Result<()> {
        let config = ClientConfig {
            headers: vec![("Authorization".to_string(), "Bearer test-token".to_string())],
            ..Default::default()
        };
        let client = test_client(config).await?;
        let options = RequestOptions::default().with_user_agent("test-agent/1.0");
        let headers = client.make_headers(
            "gl-rust/1.85 gax/1.0",
            "parent=projects/p/locations/l",
            &options,
        )?;
        let get = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
        assert_eq!(get("authorization"), Some("Bearer test-token"));
        assert_eq!(get("x-goog-api-client"), Some("gl-rust/1.85 gax/1.0"));
        assert_eq!(
            get("x-goog-request-params"),
            Some("parent=projects/p/locations/l")
        );
        assert_eq!(get("user-agent"), Some("test-agent/1.0"));
        Ok(())
    }

    #[tokio::test]
    async fn headers_without_params() -> anyhow::Result<()> {
        let client = test_client(ClientConfig::default()).await?;
        let headers = client.make_headers("test", "", &RequestOptions::default())?;
        assert!(headers.get("x-goog-request-params").is_none(), "{headers:?}");
        assert!(headers.get("user-agent").is_none(), "{headers:?}");
        Ok(())
    }

    #[test_case("parent=projects/p\nlocations/l", ""; "request params")]
    #[test_case("", "agent\r\n"; "user agent")]
    #[tokio::test]
    async fn headers_not_encodable(params: &str, user_agent: &str) -> anyhow::Result<()> {
        let client = test_client(ClientConfig::default()).await?;
        let mut options = RequestOptions::default();
        if !user_agent.is_empty() {
            options = options.with_user_agent(user_agent);
        }
        let err = client
            .make_headers("test", params, &options)
            .expect_err("control characters are not valid header values");
        assert!(err.is_serialization(), "{err:?}");
        assert!(err.status().is_none(), "{err:?}");
        Ok(())
    }
}
