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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use gax::options::RequestOptions;
use gax::paginator::Paginator;
use std::sync::Arc;

/// Implements a client for the Vertex AI API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_cloud_aiplatform_v1beta1::client::EndpointService;
/// let client = EndpointService::builder().build().await?;
/// // use `client` to make requests to the Vertex AI API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// A service for managing Vertex AI's Endpoints.
///
/// # Configuration
///
/// To configure `EndpointService` use the `with_*` methods in the type returned
/// by [builder()][EndpointService::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://aiplatform.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_header()]: attaches static metadata to every request, for example
///   the `authorization` header.
///
/// [with_endpoint()]: super::builder::endpoint_service::ClientBuilder::with_endpoint
/// [with_header()]: super::builder::endpoint_service::ClientBuilder::with_header
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `EndpointService` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `EndpointService` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[cfg(feature = "endpoint-service")]
#[derive(Clone, Debug)]
pub struct EndpointService {
    inner: Arc<dyn super::stub::dynamic::EndpointService>,
}

#[cfg(feature = "endpoint-service")]
impl EndpointService {
    /// Returns a builder for [EndpointService].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_aiplatform_v1beta1::client::EndpointService;
    /// let client = EndpointService::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::endpoint_service::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::endpoint_service::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::EndpointService + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::EndpointService>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::EndpointService> {
        super::transport::EndpointService::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::EndpointService> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::EndpointService::new)
    }

    /// Creates an Endpoint.
    ///
    /// The returned [Operation][crate::model::Operation] tracks the creation, use
    /// [get_operation][Self::get_operation] to poll its status.
    pub async fn create_endpoint(
        &self,
        req: crate::model::CreateEndpointRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        self.inner.create_endpoint(req, options).await
    }

    /// Gets an Endpoint.
    pub async fn get_endpoint(
        &self,
        req: crate::model::GetEndpointRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Endpoint> {
        self.inner.get_endpoint(req, options).await
    }

    /// Lists Endpoints in a Location.
    ///
    /// Returns a single page, use [list_endpoints_stream][Self::list_endpoints_stream]
    /// to iterate over all the pages.
    pub async fn list_endpoints(
        &self,
        req: crate::model::ListEndpointsRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::ListEndpointsResponse> {
        self.inner.list_endpoints(req, options).await
    }

    /// Streams the pages of [list_endpoints][Self::list_endpoints].
    ///
    /// The stream starts at the page identified by `req.page_token`, and
    /// fetches each page on demand. Use [Paginator::items] to iterate over
    /// the items instead of the pages.
    pub fn list_endpoints_stream(
        &self,
        req: crate::model::ListEndpointsRequest,
        options: RequestOptions,
    ) -> Paginator<crate::model::ListEndpointsResponse, crate::Error> {
        let inner = self.inner.clone();
        let token = req.page_token.clone();
        let execute = move |token: String| {
            let mut req = req.clone();
            req.page_token = token;
            let inner = inner.clone();
            let options = options.clone();
            async move { inner.list_endpoints(req, options).await }
        };
        Paginator::new(token, execute)
    }

    /// Updates an Endpoint.
    pub async fn update_endpoint(
        &self,
        req: crate::model::UpdateEndpointRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Endpoint> {
        self.inner.update_endpoint(req, options).await
    }

    /// Deletes an Endpoint.
    pub async fn delete_endpoint(
        &self,
        req: crate::model::DeleteEndpointRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        self.inner.delete_endpoint(req, options).await
    }

    /// Deploys a Model into this Endpoint, creating a DeployedModel within it.
    pub async fn deploy_model(
        &self,
        req: crate::model::DeployModelRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        self.inner.deploy_model(req, options).await
    }

    /// Undeploys a Model from an Endpoint, removing a DeployedModel from it, and
    /// freeing all resources it's using.
    pub async fn undeploy_model(
        &self,
        req: crate::model::UndeployModelRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        self.inner.undeploy_model(req, options).await
    }

    /// Gets the latest state of a long-running operation.
    ///
    /// Clients can use this method to poll the operation result at intervals as
    /// recommended by the API service.
    pub async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        self.inner.get_operation(req, options).await
    }
}

/// Implements a client for the Vertex AI API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_cloud_aiplatform_v1beta1::client::PipelineService;
/// let client = PipelineService::builder().build().await?;
/// // use `client` to make requests to the Vertex AI API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// A service for creating and managing Vertex AI's pipelines. This includes
/// `TrainingPipeline`s.
///
/// # Configuration
///
/// To configure `PipelineService` use the `with_*` methods in the type returned
/// by [builder()][PipelineService::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://aiplatform.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_header()]: attaches static metadata to every request, for example
///   the `authorization` header.
///
/// [with_endpoint()]: super::builder::pipeline_service::ClientBuilder::with_endpoint
/// [with_header()]: super::builder::pipeline_service::ClientBuilder::with_header
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `PipelineService` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `PipelineService` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[cfg(feature = "pipeline-service")]
#[derive(Clone, Debug)]
pub struct PipelineService {
    inner: Arc<dyn super::stub::dynamic::PipelineService>,
}

#[cfg(feature = "pipeline-service")]
impl PipelineService {
    /// Returns a builder for [PipelineService].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_aiplatform_v1beta1::client::PipelineService;
    /// let client = PipelineService::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::pipeline_service::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::pipeline_service::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::PipelineService + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::PipelineService>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::PipelineService> {
        super::transport::PipelineService::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::PipelineService> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::PipelineService::new)
    }

    /// Creates a TrainingPipeline. A created TrainingPipeline right away will be
    /// attempted to be run.
    pub async fn create_training_pipeline(
        &self,
        req: crate::model::CreateTrainingPipelineRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::TrainingPipeline> {
        self.inner.create_training_pipeline(req, options).await
    }

    /// Gets a TrainingPipeline.
    pub async fn get_training_pipeline(
        &self,
        req: crate::model::GetTrainingPipelineRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::TrainingPipeline> {
        self.inner.get_training_pipeline(req, options).await
    }

    /// Lists TrainingPipelines in a Location.
    ///
    /// Returns a single page, use
    /// [list_training_pipelines_stream][Self::list_training_pipelines_stream] to
    /// iterate over all the pages.
    pub async fn list_training_pipelines(
        &self,
        req: crate::model::ListTrainingPipelinesRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::ListTrainingPipelinesResponse> {
        self.inner.list_training_pipelines(req, options).await
    }

    /// Streams the pages of [list_training_pipelines][Self::list_training_pipelines].
    ///
    /// The stream starts at the page identified by `req.page_token`, and
    /// fetches each page on demand. Use [Paginator::items] to iterate over
    /// the items instead of the pages.
    pub fn list_training_pipelines_stream(
        &self,
        req: crate::model::ListTrainingPipelinesRequest,
        options: RequestOptions,
    ) -> Paginator<crate::model::ListTrainingPipelinesResponse, crate::Error> {
        let inner = self.inner.clone();
        let token = req.page_token.clone();
        let execute = move |token: String| {
            let mut req = req.clone();
            req.page_token = token;
            let inner = inner.clone();
            let options = options.clone();
            async move { inner.list_training_pipelines(req, options).await }
        };
        Paginator::new(token, execute)
    }

    /// Deletes a TrainingPipeline.
    pub async fn delete_training_pipeline(
        &self,
        req: crate::model::DeleteTrainingPipelineRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        self.inner.delete_training_pipeline(req, options).await
    }

    /// Cancels a TrainingPipeline.
    ///
    /// Starts asynchronous cancellation on the TrainingPipeline. The server makes
    /// a best effort to cancel the pipeline, but success is not guaranteed. On
    /// successful cancellation, the TrainingPipeline is not deleted; instead it
    /// becomes a pipeline with a [state][crate::model::TrainingPipeline::state] of
    /// `PIPELINE_STATE_CANCELLED`.
    pub async fn cancel_training_pipeline(
        &self,
        req: crate::model::CancelTrainingPipelineRequest,
        options: RequestOptions,
    ) -> crate::Result<()> {
        self.inner.cancel_training_pipeline(req, options).await
    }

    /// Gets the latest state of a long-running operation.
    ///
    /// Clients can use this method to poll the operation result at intervals as
    /// recommended by the API service.
    pub async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        self.inner.get_operation(req, options).await
    }
}
