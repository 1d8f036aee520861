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

//! Builders to configure and create the clients in this crate.

#[cfg(feature = "endpoint-service")]
pub mod endpoint_service {
    /// A builder for [EndpointService][crate::client::EndpointService].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_aiplatform_v1beta1::*;
    /// # use builder::endpoint_service::ClientBuilder;
    /// # use client::EndpointService;
    /// let builder : ClientBuilder = EndpointService::builder();
    /// let client = builder
    ///     .with_endpoint("https://aiplatform.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::EndpointService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = EndpointService;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }
}

#[cfg(feature = "pipeline-service")]
pub mod pipeline_service {
    /// A builder for [PipelineService][crate::client::PipelineService].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_aiplatform_v1beta1::*;
    /// # use builder::pipeline_service::ClientBuilder;
    /// # use client::PipelineService;
    /// let builder : ClientBuilder = PipelineService::builder();
    /// let client = builder
    ///     .with_endpoint("https://aiplatform.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::PipelineService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = PipelineService;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }
}
