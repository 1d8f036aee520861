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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::EndpointService].
///
/// Application developers may need to implement this trait to mock
/// `client::EndpointService`.  In other use-cases, application developers only
/// use `client::EndpointService` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "endpoint-service")]
pub trait EndpointService: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::EndpointService::create_endpoint].
    fn create_endpoint(
        &self,
        _req: crate::model::CreateEndpointRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Operation>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::EndpointService::get_endpoint].
    fn get_endpoint(
        &self,
        _req: crate::model::GetEndpointRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Endpoint>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::EndpointService::list_endpoints].
    fn list_endpoints(
        &self,
        _req: crate::model::ListEndpointsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::ListEndpointsResponse>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::EndpointService::update_endpoint].
    fn update_endpoint(
        &self,
        _req: crate::model::UpdateEndpointRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Endpoint>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::EndpointService::delete_endpoint].
    fn delete_endpoint(
        &self,
        _req: crate::model::DeleteEndpointRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Operation>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::EndpointService::deploy_model].
    fn deploy_model(
        &self,
        _req: crate::model::DeployModelRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Operation>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::EndpointService::undeploy_model].
    fn undeploy_model(
        &self,
        _req: crate::model::UndeployModelRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Operation>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::EndpointService::get_operation].
    fn get_operation(
        &self,
        _req: crate::model::GetOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Operation>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::PipelineService].
///
/// Application developers may need to implement this trait to mock
/// `client::PipelineService`.  In other use-cases, application developers only
/// use `client::PipelineService` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "pipeline-service")]
pub trait PipelineService: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::PipelineService::create_training_pipeline].
    fn create_training_pipeline(
        &self,
        _req: crate::model::CreateTrainingPipelineRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::TrainingPipeline>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::PipelineService::get_training_pipeline].
    fn get_training_pipeline(
        &self,
        _req: crate::model::GetTrainingPipelineRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::TrainingPipeline>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::PipelineService::list_training_pipelines].
    fn list_training_pipelines(
        &self,
        _req: crate::model::ListTrainingPipelinesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::ListTrainingPipelinesResponse>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::PipelineService::delete_training_pipeline].
    fn delete_training_pipeline(
        &self,
        _req: crate::model::DeleteTrainingPipelineRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Operation>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::PipelineService::cancel_training_pipeline].
    fn cancel_training_pipeline(
        &self,
        _req: crate::model::CancelTrainingPipelineRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<()>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::PipelineService::get_operation].
    fn get_operation(
        &self,
        _req: crate::model::GetOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Operation>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
