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

//! The gRPC transport for the services in this crate.
//!
//! Each stub method is described by its fully qualified service name, its
//! method name, and the HTTP/2 path of the RPC. All the stubs of a client share
//! a single [gaxi::grpc::Client], and therefore a single channel.

use crate::Result;
use gax::options::RequestOptions;

/// Formats the `x-goog-request-params` header value for a request.
///
/// The services route each request using the resource name (or the parent
/// resource name) in the request.
trait RequestParams {
    fn request_params(&self) -> String;
}

impl RequestParams for crate::model::CreateEndpointRequest {
    fn request_params(&self) -> String {
        gaxi::routing_parameter::format(&[("parent", &self.parent)])
    }
}

impl RequestParams for crate::model::GetEndpointRequest {
    fn request_params(&self) -> String {
        gaxi::routing_parameter::format(&[("name", &self.name)])
    }
}

impl RequestParams for crate::model::ListEndpointsRequest {
    fn request_params(&self) -> String {
        gaxi::routing_parameter::format(&[("parent", &self.parent)])
    }
}

impl RequestParams for crate::model::UpdateEndpointRequest {
    fn request_params(&self) -> String {
        let name = self
            .endpoint
            .as_ref()
            .map(|e| e.name.as_str())
            .unwrap_or_default();
        gaxi::routing_parameter::format(&[("endpoint.name", name)])
    }
}

impl RequestParams for crate::model::DeleteEndpointRequest {
    fn request_params(&self) -> String {
        gaxi::routing_parameter::format(&[("name", &self.name)])
    }
}

impl RequestParams for crate::model::DeployModelRequest {
    fn request_params(&self) -> String {
        gaxi::routing_parameter::format(&[("endpoint", &self.endpoint)])
    }
}

impl RequestParams for crate::model::UndeployModelRequest {
    fn request_params(&self) -> String {
        gaxi::routing_parameter::format(&[("endpoint", &self.endpoint)])
    }
}

impl RequestParams for crate::model::CreateTrainingPipelineRequest {
    fn request_params(&self) -> String {
        gaxi::routing_parameter::format(&[("parent", &self.parent)])
    }
}

impl RequestParams for crate::model::GetTrainingPipelineRequest {
    fn request_params(&self) -> String {
        gaxi::routing_parameter::format(&[("name", &self.name)])
    }
}

impl RequestParams for crate::model::ListTrainingPipelinesRequest {
    fn request_params(&self) -> String {
        gaxi::routing_parameter::format(&[("parent", &self.parent)])
    }
}

impl RequestParams for crate::model::DeleteTrainingPipelineRequest {
    fn request_params(&self) -> String {
        gaxi::routing_parameter::format(&[("name", &self.name)])
    }
}

impl RequestParams for crate::model::CancelTrainingPipelineRequest {
    fn request_params(&self) -> String {
        gaxi::routing_parameter::format(&[("name", &self.name)])
    }
}

impl RequestParams for crate::model::GetOperationRequest {
    fn request_params(&self) -> String {
        gaxi::routing_parameter::format(&[("name", &self.name)])
    }
}

// Sends a unary request, the path is derived from the service and method names.
async fn execute<Req, Resp>(
    inner: &gaxi::grpc::Client,
    service: &'static str,
    method: &'static str,
    path: &'static str,
    req: Req,
    options: RequestOptions,
) -> Result<Resp>
where
    Req: prost::Message + RequestParams + Send + Sync + 'static,
    Resp: prost::Message + Default + Send + Sync + 'static,
{
    let params = req.request_params();
    inner
        .execute(
            tonic::GrpcMethod::new(service, method),
            http::uri::PathAndQuery::from_static(path),
            req,
            options,
            &crate::info::X_GOOG_API_CLIENT_HEADER,
            &params,
        )
        .await
}

const OPERATIONS: &str = "google.longrunning.Operations";

/// Implements [EndpointService](super::stub::EndpointService) using a [gaxi::grpc::Client].
#[cfg(feature = "endpoint-service")]
#[derive(Clone)]
pub struct EndpointService {
    inner: gaxi::grpc::Client,
}

#[cfg(feature = "endpoint-service")]
impl std::fmt::Debug for EndpointService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("EndpointService")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "endpoint-service")]
impl EndpointService {
    const SERVICE: &str = "google.cloud.aiplatform.v1beta1.EndpointService";

    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::grpc::Client::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "endpoint-service")]
impl super::stub::EndpointService for EndpointService {
    async fn create_endpoint(
        &self,
        req: crate::model::CreateEndpointRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Operation> {
        execute(
            &self.inner,
            Self::SERVICE,
            "CreateEndpoint",
            "/google.cloud.aiplatform.v1beta1.EndpointService/CreateEndpoint",
            req,
            options,
        )
        .await
    }

    async fn get_endpoint(
        &self,
        req: crate::model::GetEndpointRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Endpoint> {
        execute(
            &self.inner,
            Self::SERVICE,
            "GetEndpoint",
            "/google.cloud.aiplatform.v1beta1.EndpointService/GetEndpoint",
            req,
            options,
        )
        .await
    }

    async fn list_endpoints(
        &self,
        req: crate::model::ListEndpointsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListEndpointsResponse> {
        execute(
            &self.inner,
            Self::SERVICE,
            "ListEndpoints",
            "/google.cloud.aiplatform.v1beta1.EndpointService/ListEndpoints",
            req,
            options,
        )
        .await
    }

    async fn update_endpoint(
        &self,
        req: crate::model::UpdateEndpointRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Endpoint> {
        execute(
            &self.inner,
            Self::SERVICE,
            "UpdateEndpoint",
            "/google.cloud.aiplatform.v1beta1.EndpointService/UpdateEndpoint",
            req,
            options,
        )
        .await
    }

    async fn delete_endpoint(
        &self,
        req: crate::model::DeleteEndpointRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Operation> {
        execute(
            &self.inner,
            Self::SERVICE,
            "DeleteEndpoint",
            "/google.cloud.aiplatform.v1beta1.EndpointService/DeleteEndpoint",
            req,
            options,
        )
        .await
    }

    async fn deploy_model(
        &self,
        req: crate::model::DeployModelRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Operation> {
        execute(
            &self.inner,
            Self::SERVICE,
            "DeployModel",
            "/google.cloud.aiplatform.v1beta1.EndpointService/DeployModel",
            req,
            options,
        )
        .await
    }

    async fn undeploy_model(
        &self,
        req: crate::model::UndeployModelRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Operation> {
        execute(
            &self.inner,
            Self::SERVICE,
            "UndeployModel",
            "/google.cloud.aiplatform.v1beta1.EndpointService/UndeployModel",
            req,
            options,
        )
        .await
    }

    async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Operation> {
        execute(
            &self.inner,
            OPERATIONS,
            "GetOperation",
            "/google.longrunning.Operations/GetOperation",
            req,
            options,
        )
        .await
    }
}

/// Implements [PipelineService](super::stub::PipelineService) using a [gaxi::grpc::Client].
#[cfg(feature = "pipeline-service")]
#[derive(Clone)]
pub struct PipelineService {
    inner: gaxi::grpc::Client,
}

#[cfg(feature = "pipeline-service")]
impl std::fmt::Debug for PipelineService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("PipelineService")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "pipeline-service")]
impl PipelineService {
    const SERVICE: &str = "google.cloud.aiplatform.v1beta1.PipelineService";

    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::grpc::Client::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "pipeline-service")]
impl super::stub::PipelineService for PipelineService {
    async fn create_training_pipeline(
        &self,
        req: crate::model::CreateTrainingPipelineRequest,
        options: RequestOptions,
    ) -> Result<crate::model::TrainingPipeline> {
        execute(
            &self.inner,
            Self::SERVICE,
            "CreateTrainingPipeline",
            "/google.cloud.aiplatform.v1beta1.PipelineService/CreateTrainingPipeline",
            req,
            options,
        )
        .await
    }

    async fn get_training_pipeline(
        &self,
        req: crate::model::GetTrainingPipelineRequest,
        options: RequestOptions,
    ) -> Result<crate::model::TrainingPipeline> {
        execute(
            &self.inner,
            Self::SERVICE,
            "GetTrainingPipeline",
            "/google.cloud.aiplatform.v1beta1.PipelineService/GetTrainingPipeline",
            req,
            options,
        )
        .await
    }

    async fn list_training_pipelines(
        &self,
        req: crate::model::ListTrainingPipelinesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListTrainingPipelinesResponse> {
        execute(
            &self.inner,
            Self::SERVICE,
            "ListTrainingPipelines",
            "/google.cloud.aiplatform.v1beta1.PipelineService/ListTrainingPipelines",
            req,
            options,
        )
        .await
    }

    async fn delete_training_pipeline(
        &self,
        req: crate::model::DeleteTrainingPipelineRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Operation> {
        execute(
            &self.inner,
            Self::SERVICE,
            "DeleteTrainingPipeline",
            "/google.cloud.aiplatform.v1beta1.PipelineService/DeleteTrainingPipeline",
            req,
            options,
        )
        .await
    }

    async fn cancel_training_pipeline(
        &self,
        req: crate::model::CancelTrainingPipelineRequest,
        options: RequestOptions,
    ) -> Result<()> {
        execute(
            &self.inner,
            Self::SERVICE,
            "CancelTrainingPipeline",
            "/google.cloud.aiplatform.v1beta1.PipelineService/CancelTrainingPipeline",
            req,
            options,
        )
        .await
    }

    async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Operation> {
        execute(
            &self.inner,
            OPERATIONS,
            "GetOperation",
            "/google.longrunning.Operations/GetOperation",
            req,
            options,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use test_case::test_case;

    const PARENT: &str = "projects/p/locations/l";
    const ENDPOINT: &str = "projects/p/locations/l/endpoints/e";
    const PIPELINE: &str = "projects/p/locations/l/trainingPipelines/t";

    #[test_case(&CreateEndpointRequest { parent: PARENT.into(), ..Default::default() }, "parent"; "create endpoint")]
    #[test_case(&ListEndpointsRequest { parent: PARENT.into(), page_token: "abc".into(), ..Default::default() }, "parent"; "list endpoints")]
    #[test_case(&CreateTrainingPipelineRequest { parent: PARENT.into(), ..Default::default() }, "parent"; "create training pipeline")]
    #[test_case(&ListTrainingPipelinesRequest { parent: PARENT.into(), ..Default::default() }, "parent"; "list training pipelines")]
    fn parent_params(req: &dyn RequestParams, key: &str) {
        assert_eq!(req.request_params(), format!("{key}={PARENT}"));
    }

    #[test_case(&GetEndpointRequest { name: ENDPOINT.into() }, "name"; "get endpoint")]
    #[test_case(&DeleteEndpointRequest { name: ENDPOINT.into() }, "name"; "delete endpoint")]
    #[test_case(&DeployModelRequest { endpoint: ENDPOINT.into(), ..Default::default() }, "endpoint"; "deploy model")]
    #[test_case(&UndeployModelRequest { endpoint: ENDPOINT.into(), ..Default::default() }, "endpoint"; "undeploy model")]
    fn endpoint_params(req: &dyn RequestParams, key: &str) {
        assert_eq!(req.request_params(), format!("{key}={ENDPOINT}"));
    }

    #[test_case(&GetTrainingPipelineRequest { name: PIPELINE.into() }; "get training pipeline")]
    #[test_case(&DeleteTrainingPipelineRequest { name: PIPELINE.into() }; "delete training pipeline")]
    #[test_case(&CancelTrainingPipelineRequest { name: PIPELINE.into() }; "cancel training pipeline")]
    fn pipeline_params(req: &dyn RequestParams) {
        assert_eq!(req.request_params(), format!("name={PIPELINE}"));
    }

    #[test]
    fn operation_params() {
        let req = GetOperationRequest {
            name: "projects/p/locations/l/operations/o".into(),
        };
        assert_eq!(
            req.request_params(),
            "name=projects/p/locations/l/operations/o"
        );
    }

    #[test]
    fn update_endpoint_params() {
        let req = UpdateEndpointRequest {
            endpoint: Some(Endpoint {
                name: ENDPOINT.into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(req.request_params(), format!("endpoint.name={ENDPOINT}"));
        assert_eq!(
            UpdateEndpointRequest::default().request_params(),
            "endpoint.name="
        );
    }

    #[cfg(feature = "endpoint-service")]
    #[tokio::test]
    async fn endpoint_service_lazy_connect() -> anyhow::Result<()> {
        // The transport never connects until the first request.
        let config = gaxi::options::ClientConfig {
            endpoint: Some("http://127.0.0.1:1".to_string()),
            ..Default::default()
        };
        let transport = EndpointService::new(config).await?;
        let fmt = format!("{transport:?}");
        assert!(fmt.contains("EndpointService"), "{fmt}");
        Ok(())
    }
}
