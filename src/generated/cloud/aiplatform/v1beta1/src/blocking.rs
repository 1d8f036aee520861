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

//! Blocking clients for the services in this crate.
//!
//! These clients wrap the async clients in [crate::client] and an internal,
//! single-threaded, Tokio runtime. Each method blocks the calling thread until
//! the RPC completes. The List RPCs return a [Pager], which fetches the
//! remaining pages (again, blocking the calling thread) as the application
//! iterates over the pages or the items.
//!
//! The clients in this module must not be used from within an async context,
//! the internal runtime cannot block a thread that is already driving a
//! runtime. Use the clients in [crate::client] instead.

use gax::options::RequestOptions;
use gax::pager::Pager;
use std::sync::Arc;
use tokio::runtime::Runtime;

// Names the fetch function in the pager aliases. Applications receive pagers
// from the list methods and never build one.
#[doc(hidden)]
pub type PageFetcher<Req, Resp> = Box<dyn FnMut(&Req) -> crate::Result<Resp> + Send>;

fn new_runtime() -> gax::client_builder::Result<Arc<Runtime>> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map(Arc::new)
        .map_err(gax::client_builder::Error::transport)
}

/// A pager over the results of [EndpointService::list_endpoints].
///
/// The pager starts with the first page, which was already fetched. Iterate
/// over the pager to get the items, or call [pages()][Pager::pages] to get
/// each response. [response()][Pager::response] returns the most recently
/// fetched page.
#[cfg(feature = "endpoint-service")]
pub type ListEndpointsPager = Pager<
    crate::model::ListEndpointsRequest,
    crate::model::ListEndpointsResponse,
    PageFetcher<crate::model::ListEndpointsRequest, crate::model::ListEndpointsResponse>,
>;

/// A blocking client for the Vertex AI EndpointService.
///
/// # Example
/// ```no_run
/// # use google_cloud_aiplatform_v1beta1::{blocking, client};
/// # fn sample() -> anyhow::Result<()> {
/// let client = blocking::EndpointService::new(client::EndpointService::builder())?;
/// # Ok(()) }
/// ```
#[cfg(feature = "endpoint-service")]
#[derive(Clone, Debug)]
pub struct EndpointService {
    inner: crate::client::EndpointService,
    runtime: Arc<Runtime>,
}

#[cfg(feature = "endpoint-service")]
impl EndpointService {
    /// Creates a new client, using `builder` for the configuration.
    pub fn new(
        builder: crate::builder::endpoint_service::ClientBuilder,
    ) -> gax::client_builder::Result<Self> {
        let runtime = new_runtime()?;
        let inner = runtime.block_on(builder.build())?;
        Ok(Self { inner, runtime })
    }

    /// Creates a blocking client wrapping an async client.
    ///
    /// The async client must not depend on a different runtime, for example,
    /// clients created with [from_stub][crate::client::EndpointService::from_stub]
    /// work with any runtime.
    pub fn from_client(
        inner: crate::client::EndpointService,
    ) -> gax::client_builder::Result<Self> {
        let runtime = new_runtime()?;
        Ok(Self { inner, runtime })
    }

    /// Calls [create_endpoint][crate::client::EndpointService::create_endpoint],
    /// blocking until it completes.
    pub fn create_endpoint(
        &self,
        req: crate::model::CreateEndpointRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        self.runtime.block_on(self.inner.create_endpoint(req, options))
    }

    /// Calls [get_endpoint][crate::client::EndpointService::get_endpoint],
    /// blocking until it completes.
    pub fn get_endpoint(
        &self,
        req: crate::model::GetEndpointRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Endpoint> {
        self.runtime.block_on(self.inner.get_endpoint(req, options))
    }

    /// Calls [list_endpoints][crate::client::EndpointService::list_endpoints]
    /// and returns a pager over all the results.
    ///
    /// The first page is fetched before this function returns, any error in
    /// that request is returned immediately. Errors fetching later pages are
    /// returned by the pager.
    pub fn list_endpoints(
        &self,
        req: crate::model::ListEndpointsRequest,
        options: RequestOptions,
    ) -> crate::Result<ListEndpointsPager> {
        let response = self
            .runtime
            .block_on(self.inner.list_endpoints(req.clone(), options.clone()))?;
        let inner = self.inner.clone();
        let runtime = self.runtime.clone();
        let fetch: PageFetcher<crate::model::ListEndpointsRequest, crate::model::ListEndpointsResponse> =
            Box::new(move |req: &crate::model::ListEndpointsRequest| {
                runtime.block_on(inner.list_endpoints(req.clone(), options.clone()))
            });
        Ok(Pager::new(fetch, req, response))
    }

    /// Calls [update_endpoint][crate::client::EndpointService::update_endpoint],
    /// blocking until it completes.
    pub fn update_endpoint(
        &self,
        req: crate::model::UpdateEndpointRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Endpoint> {
        self.runtime.block_on(self.inner.update_endpoint(req, options))
    }

    /// Calls [delete_endpoint][crate::client::EndpointService::delete_endpoint],
    /// blocking until it completes.
    pub fn delete_endpoint(
        &self,
        req: crate::model::DeleteEndpointRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        self.runtime.block_on(self.inner.delete_endpoint(req, options))
    }

    /// Calls [deploy_model][crate::client::EndpointService::deploy_model],
    /// blocking until it completes.
    pub fn deploy_model(
        &self,
        req: crate::model::DeployModelRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        self.runtime.block_on(self.inner.deploy_model(req, options))
    }

    /// Calls [undeploy_model][crate::client::EndpointService::undeploy_model],
    /// blocking until it completes.
    pub fn undeploy_model(
        &self,
        req: crate::model::UndeployModelRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        self.runtime.block_on(self.inner.undeploy_model(req, options))
    }

    /// Calls [get_operation][crate::client::EndpointService::get_operation],
    /// blocking until it completes.
    pub fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        self.runtime.block_on(self.inner.get_operation(req, options))
    }
}

/// A pager over the results of [PipelineService::list_training_pipelines].
///
/// The pager starts with the first page, which was already fetched. Iterate
/// over the pager to get the items, or call [pages()][Pager::pages] to get
/// each response. [response()][Pager::response] returns the most recently
/// fetched page.
#[cfg(feature = "pipeline-service")]
pub type ListTrainingPipelinesPager = Pager<
    crate::model::ListTrainingPipelinesRequest,
    crate::model::ListTrainingPipelinesResponse,
    PageFetcher<crate::model::ListTrainingPipelinesRequest, crate::model::ListTrainingPipelinesResponse>,
>;

/// A blocking client for the Vertex AI PipelineService.
///
/// # Example
/// ```no_run
/// # use google_cloud_aiplatform_v1beta1::{blocking, client};
/// # fn sample() -> anyhow::Result<()> {
/// let client = blocking::PipelineService::new(client::PipelineService::builder())?;
/// # Ok(()) }
/// ```
#[cfg(feature = "pipeline-service")]
#[derive(Clone, Debug)]
pub struct PipelineService {
    inner: crate::client::PipelineService,
    runtime: Arc<Runtime>,
}

#[cfg(feature = "pipeline-service")]
impl PipelineService {
    /// Creates a new client, using `builder` for the configuration.
    pub fn new(
        builder: crate::builder::pipeline_service::ClientBuilder,
    ) -> gax::client_builder::Result<Self> {
        let runtime = new_runtime()?;
        let inner = runtime.block_on(builder.build())?;
        Ok(Self { inner, runtime })
    }

    /// Creates a blocking client wrapping an async client.
    ///
    /// The async client must not depend on a different runtime, for example,
    /// clients created with [from_stub][crate::client::PipelineService::from_stub]
    /// work with any runtime.
    pub fn from_client(
        inner: crate::client::PipelineService,
    ) -> gax::client_builder::Result<Self> {
        let runtime = new_runtime()?;
        Ok(Self { inner, runtime })
    }

    /// Calls [create_training_pipeline][crate::client::PipelineService::create_training_pipeline],
    /// blocking until it completes.
    pub fn create_training_pipeline(
        &self,
        req: crate::model::CreateTrainingPipelineRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::TrainingPipeline> {
        self.runtime.block_on(self.inner.create_training_pipeline(req, options))
    }

    /// Calls [get_training_pipeline][crate::client::PipelineService::get_training_pipeline],
    /// blocking until it completes.
    pub fn get_training_pipeline(
        &self,
        req: crate::model::GetTrainingPipelineRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::TrainingPipeline> {
        self.runtime.block_on(self.inner.get_training_pipeline(req, options))
    }

    /// Calls [list_training_pipelines][crate::client::PipelineService::list_training_pipelines]
    /// and returns a pager over all the results.
    ///
    /// The first page is fetched before this function returns, any error in
    /// that request is returned immediately. Errors fetching later pages are
    /// returned by the pager.
    pub fn list_training_pipelines(
        &self,
        req: crate::model::ListTrainingPipelinesRequest,
        options: RequestOptions,
    ) -> crate::Result<ListTrainingPipelinesPager> {
        let response = self
            .runtime
            .block_on(self.inner.list_training_pipelines(req.clone(), options.clone()))?;
        let inner = self.inner.clone();
        let runtime = self.runtime.clone();
        let fetch: PageFetcher<crate::model::ListTrainingPipelinesRequest, crate::model::ListTrainingPipelinesResponse> =
            Box::new(move |req: &crate::model::ListTrainingPipelinesRequest| {
                runtime.block_on(inner.list_training_pipelines(req.clone(), options.clone()))
            });
        Ok(Pager::new(fetch, req, response))
    }

    /// Calls [delete_training_pipeline][crate::client::PipelineService::delete_training_pipeline],
    /// blocking until it completes.
    pub fn delete_training_pipeline(
        &self,
        req: crate::model::DeleteTrainingPipelineRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        self.runtime.block_on(self.inner.delete_training_pipeline(req, options))
    }

    /// Calls [cancel_training_pipeline][crate::client::PipelineService::cancel_training_pipeline],
    /// blocking until it completes.
    pub fn cancel_training_pipeline(
        &self,
        req: crate::model::CancelTrainingPipelineRequest,
        options: RequestOptions,
    ) -> crate::Result<()> {
        self.runtime.block_on(self.inner.cancel_training_pipeline(req, options))
    }

    /// Calls [get_operation][crate::client::PipelineService::get_operation],
    /// blocking until it completes.
    pub fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        self.runtime.block_on(self.inner.get_operation(req, options))
    }
}
