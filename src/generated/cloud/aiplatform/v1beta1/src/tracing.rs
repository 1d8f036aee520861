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

use crate::Result;

/// Implements a [EndpointService](super::stub::EndpointService) decorator for logging and tracing.
#[cfg(feature = "endpoint-service")]
#[derive(Clone, Debug)]
pub struct EndpointService<T>
where
    T: super::stub::EndpointService + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

#[cfg(feature = "endpoint-service")]
impl<T> EndpointService<T>
where
    T: super::stub::EndpointService + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[cfg(feature = "endpoint-service")]
impl<T> super::stub::EndpointService for EndpointService<T>
where
    T: super::stub::EndpointService + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn create_endpoint(
        &self,
        req: crate::model::CreateEndpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        self.inner.create_endpoint(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_endpoint(
        &self,
        req: crate::model::GetEndpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Endpoint> {
        self.inner.get_endpoint(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_endpoints(
        &self,
        req: crate::model::ListEndpointsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::ListEndpointsResponse> {
        self.inner.list_endpoints(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_endpoint(
        &self,
        req: crate::model::UpdateEndpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Endpoint> {
        self.inner.update_endpoint(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_endpoint(
        &self,
        req: crate::model::DeleteEndpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        self.inner.delete_endpoint(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn deploy_model(
        &self,
        req: crate::model::DeployModelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        self.inner.deploy_model(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn undeploy_model(
        &self,
        req: crate::model::UndeployModelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        self.inner.undeploy_model(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        self.inner.get_operation(req, options).await
    }
}

/// Implements a [PipelineService](super::stub::PipelineService) decorator for logging and tracing.
#[cfg(feature = "pipeline-service")]
#[derive(Clone, Debug)]
pub struct PipelineService<T>
where
    T: super::stub::PipelineService + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

#[cfg(feature = "pipeline-service")]
impl<T> PipelineService<T>
where
    T: super::stub::PipelineService + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[cfg(feature = "pipeline-service")]
impl<T> super::stub::PipelineService for PipelineService<T>
where
    T: super::stub::PipelineService + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn create_training_pipeline(
        &self,
        req: crate::model::CreateTrainingPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::TrainingPipeline> {
        self.inner.create_training_pipeline(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_training_pipeline(
        &self,
        req: crate::model::GetTrainingPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::TrainingPipeline> {
        self.inner.get_training_pipeline(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_training_pipelines(
        &self,
        req: crate::model::ListTrainingPipelinesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::ListTrainingPipelinesResponse> {
        self.inner.list_training_pipelines(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_training_pipeline(
        &self,
        req: crate::model::DeleteTrainingPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        self.inner.delete_training_pipeline(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn cancel_training_pipeline(
        &self,
        req: crate::model::CancelTrainingPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<()> {
        self.inner.cancel_training_pipeline(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        self.inner.get_operation(req, options).await
    }
}
