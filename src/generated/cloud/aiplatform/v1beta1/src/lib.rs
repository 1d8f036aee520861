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

//! Google Cloud Client Libraries for Rust - Vertex AI API (v1beta1)
//!
//! This crate contains gRPC-based client libraries for the Endpoint and
//! Pipeline services in the `google.cloud.aiplatform.v1beta1` package.
//!
//! # Quickstart
//!
//! The main types to work with this crate are the clients:
//!
//! * [EndpointService](client::EndpointService)
//! * [PipelineService](client::PipelineService)
//!
//! Applications that do not use an async runtime can use the equivalent
//! clients in the [blocking] module. Their List RPCs return a
//! [Pager](gax::pager::Pager), which fetches additional pages on demand.
//!
//! ```no_run
//! # use google_cloud_aiplatform_v1beta1::blocking::EndpointService;
//! # use google_cloud_aiplatform_v1beta1::model::ListEndpointsRequest;
//! # fn sample() -> anyhow::Result<()> {
//! let client = EndpointService::new(
//!     google_cloud_aiplatform_v1beta1::client::EndpointService::builder()
//!         .with_endpoint("https://us-central1-aiplatform.googleapis.com"),
//! )?;
//! let request = ListEndpointsRequest {
//!     parent: "projects/my-project/locations/us-central1".into(),
//!     ..Default::default()
//! };
//! for endpoint in client.list_endpoints(request, Default::default())? {
//!     println!("{:?}", endpoint?);
//! }
//! # Ok(()) }
//! ```
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we
//! do **not** recommend that you use this crate in production. We welcome
//! feedback about the APIs, documentation, missing features, bugs, etc.

/// The messages and enums that are part of this client library.
pub mod model;

pub use gax::Result;
pub use gax::error::Error;

#[cfg(any(feature = "endpoint-service", feature = "pipeline-service"))]
pub mod builder;

#[cfg(any(feature = "endpoint-service", feature = "pipeline-service"))]
pub mod client;

#[cfg(any(feature = "endpoint-service", feature = "pipeline-service"))]
pub mod blocking;

#[cfg(any(feature = "endpoint-service", feature = "pipeline-service"))]
pub mod stub;

#[cfg(any(feature = "endpoint-service", feature = "pipeline-service"))]
mod tracing;

#[cfg(any(feature = "endpoint-service", feature = "pipeline-service"))]
mod transport;

/// The default host used by the service.
#[cfg(any(feature = "endpoint-service", feature = "pipeline-service"))]
const DEFAULT_HOST: &str = "https://aiplatform.googleapis.com";

#[cfg(any(feature = "endpoint-service", feature = "pipeline-service"))]
pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub(crate) static X_GOOG_API_CLIENT_HEADER: std::sync::LazyLock<String> =
        std::sync::LazyLock::new(|| {
            let ac = gaxi::api_header::XGoogApiClient {
                name: NAME,
                version: VERSION,
                library_type: gaxi::api_header::GAPIC,
            };
            ac.grpc_header_value()
        });
}
