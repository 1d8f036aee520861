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
use super::status::status_from_proto;
use gax::error::Error;
use gax::error::rpc::Status;
use prost::Message;
use std::error::Error as _;

/// Maps a [tonic::Status] to the error returned by the client methods.
///
/// Failures detected by `tonic` before a response arrives keep their kind. A
/// response that is not gRPC is a transport error. Anything else is a service
/// error, with the `google.rpc.Status` details decoded from the trailers.
pub fn to_gax_error(status: tonic::Status) -> Error {
    match Failure::classify(&status) {
        Failure::Timeout => Error::timeout(status),
        Failure::Connect => Error::connect(status),
        Failure::Transport => Error::transport(status.metadata().clone().into_headers(), status),
        Failure::NotGrpc => Error::transport(
            status.metadata().clone().into_headers(),
            NotGrpcResponse(status),
        ),
        Failure::Service => {
            let headers = status.metadata().clone().into_headers();
            Error::service_full(service_status(&status), Some(headers), Some(Box::new(status)))
        }
    }
}

#[derive(Debug, PartialEq)]
enum Failure {
    Timeout,
    Connect,
    Transport,
    NotGrpc,
    Service,
}

impl Failure {
    fn classify(status: &tonic::Status) -> Self {
        if caused_by::<tonic::TimeoutExpired>(status) {
            return Self::Timeout;
        }
        if caused_by::<tonic::ConnectError>(status) {
            return Self::Connect;
        }
        if caused_by::<tonic::transport::Error>(status) {
            return Self::Transport;
        }
        let not_grpc = status
            .metadata()
            .get("content-type")
            .is_some_and(|v| !v.as_bytes().starts_with(b"application/grpc"));
        if not_grpc { Self::NotGrpc } else { Self::Service }
    }
}

fn caused_by<T>(status: &tonic::Status) -> bool
where
    T: std::error::Error + 'static,
{
    // Bounded, the chain may contain cycles.
    std::iter::successors(status.source(), |&e| e.source())
        .take(32)
        .any(|e| e.is::<T>())
}

fn service_status(status: &tonic::Status) -> Status {
    let proto = crate::google::rpc::Status::decode(status.details()).unwrap_or_default();
    status_from_proto(proto)
        .set_code(i32::from(status.code()))
        .set_message(status.message())
}

#[derive(Debug, thiserror::Error)]
#[error(
    "the response content-type is not application/grpc, \
     check the endpoint serves the Vertex AI gRPC services"
)]
struct NotGrpcResponse(#[source] tonic::Status);

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, ErrorInfo, StatusDetails};
    use pretty_assertions::assert_eq;
    use test_case::test_case;
    use tonic::metadata::AsciiMetadataValue;

    const ENDPOINT: &str = "projects/p/locations/us-central1/endpoints/123";

    fn grpc_response(mut status: tonic::Status) -> tonic::Status {
        status.metadata_mut().insert(
            "content-type",
            AsciiMetadataValue::from_static("application/grpc"),
        );
        status
    }

    #[test_case(tonic::Code::NotFound, Code::NotFound; "get deleted endpoint")]
    #[test_case(tonic::Code::InvalidArgument, Code::InvalidArgument; "bad filter")]
    #[test_case(tonic::Code::FailedPrecondition, Code::FailedPrecondition; "deploy while undeploying")]
    #[test_case(tonic::Code::PermissionDenied, Code::PermissionDenied; "missing iam permission")]
    #[test_case(tonic::Code::ResourceExhausted, Code::ResourceExhausted; "quota")]
    #[test_case(tonic::Code::Unavailable, Code::Unavailable; "unavailable")]
    fn service_error(input: tonic::Code, want: Code) {
        let message = format!("Endpoint `{ENDPOINT}` request failed");
        let got = to_gax_error(grpc_response(tonic::Status::new(input, message.clone())));
        let status = got.status().expect("want a service error");
        assert_eq!(status.code, want);
        assert_eq!(status.message, message);
        assert!(status.details.is_empty(), "{status:?}");
        assert!(got.http_headers().is_some(), "{got:?}");

        let source = got
            .source()
            .and_then(|e| e.downcast_ref::<tonic::Status>())
            .expect("want a tonic::Status as source");
        assert_eq!(source.code(), input);
    }

    #[test]
    fn service_error_without_metadata() {
        let status = tonic::Status::not_found("TrainingPipeline does not exist");
        assert_eq!(Failure::classify(&status), Failure::Service);
        let got = to_gax_error(status);
        assert_eq!(got.status().map(|s| s.code), Some(Code::NotFound));
    }

    #[test]
    fn service_error_with_details() -> anyhow::Result<()> {
        let info = crate::google::rpc::ErrorInfo {
            reason: "RATE_LIMIT_EXCEEDED".into(),
            domain: "aiplatform.googleapis.com".into(),
            metadata: [("service".to_string(), "aiplatform.googleapis.com".to_string())].into(),
        };
        let details = crate::google::rpc::Status {
            code: Code::ResourceExhausted as i32,
            message: "quota exceeded".into(),
            details: vec![prost_types::Any::from_msg(&info)?],
        };
        let status = tonic::Status::with_details(
            tonic::Code::ResourceExhausted,
            "quota exceeded",
            details.encode_to_vec().into(),
        );
        let got = to_gax_error(grpc_response(status));
        let status = got.status().expect("want a service error");
        assert_eq!(
            status.details,
            vec![StatusDetails::ErrorInfo(
                ErrorInfo::default()
                    .set_reason("RATE_LIMIT_EXCEEDED")
                    .set_domain("aiplatform.googleapis.com")
                    .set_metadata([("service", "aiplatform.googleapis.com")])
            )]
        );
        Ok(())
    }

    #[test]
    fn not_grpc_response() {
        // A proxy answering with an HTML error page.
        let mut status = tonic::Status::unknown("unexpected content-type");
        status.metadata_mut().insert(
            "content-type",
            AsciiMetadataValue::from_static("text/html; charset=UTF-8"),
        );
        assert_eq!(Failure::classify(&status), Failure::NotGrpc);

        let got = to_gax_error(status);
        assert!(got.is_transport(), "{got:?}");
        assert!(got.status().is_none(), "{got:?}");
        let source = got
            .source()
            .and_then(|e| e.downcast_ref::<NotGrpcResponse>())
            .expect("want a NotGrpcResponse as source");
        assert_eq!(source.0.code(), tonic::Code::Unknown);
        assert!(source.to_string().contains("Vertex AI"), "{source}");
    }
}
