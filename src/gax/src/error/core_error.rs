// Copyright 2024 Google LLC
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
use super::rpc::Status;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error returned by every RPC in the client libraries.
///
/// An RPC can fail before the request leaves the process (a metadata value
/// that is not a valid header), while connecting to the endpoint, because the
/// attempt deadline expires, in the transport, or in the service itself.
/// Use the predicates to classify the error, and [Error::status] to inspect
/// the service response. The [source][std::error::Error::source] holds the
/// underlying `tonic` error, if any.
///
/// # Example
/// ```
/// use google_cloud_gax::error::Error;
/// use google_cloud_gax::error::rpc::Code;
/// match get_endpoint() {
///     Ok(name) => println!("found {name}"),
///     Err(e) if e.status().is_some_and(|s| s.code == Code::NotFound) => {
///         println!("no such endpoint");
///     }
///     Err(e) if e.is_timeout() => println!("deadline exceeded: {e}"),
///     Err(e) => println!("cannot get endpoint: {e}"),
/// }
///
/// fn get_endpoint() -> Result<String, Error> {
///     # use google_cloud_gax::error::rpc::Status;
///     # Err(Error::service(Status::default().set_code(Code::NotFound).set_message("NOT FOUND")))
///     // ... call the service ...
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error from a `google.rpc.Status` returned by the service.
    ///
    /// # Example
    /// ```
    /// use google_cloud_gax::error::Error;
    /// use google_cloud_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self::service_full(status, None, None)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates a service error keeping the response metadata and the
    /// `tonic::Status` that carried it.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn service_full(
        status: Status,
        headers: Option<HeaderMap>,
        source: Option<BoxError>,
    ) -> Self {
        let details = ServiceDetails { status, headers };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source,
        }
    }

    /// Creates an error for an attempt that exceeded its deadline.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_cloud_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The attempt did not complete before the `attempt_timeout` set in the
    /// request options.
    ///
    /// The request may have reached the service. Mutations such as
    /// `CreateEndpoint` or `DeployModel` may still complete, check the
    /// resource (or the long-running operation) before sending them again.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn connect<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Connect,
            source: Some(source.into()),
        }
    }

    /// The client could not connect to the service endpoint.
    ///
    /// The request was never sent.
    ///
    /// # Troubleshooting
    ///
    /// Verify the endpoint configured in the client builder. Regional
    /// resources in Vertex AI are only reachable through the regional
    /// endpoints, e.g. `https://us-central1-aiplatform.googleapis.com`.
    pub fn is_connect(&self) -> bool {
        matches!(self.kind, ErrorKind::Connect)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_cloud_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be encoded, for example, the routing parameters
    /// or the user agent are not valid metadata values.
    ///
    /// The request was never sent, and sending it again with the same
    /// values fails the same way.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The status returned by the service, if this is a service error.
    ///
    /// # Examples
    /// ```
    /// use google_cloud_gax::error::{Error, rpc::{Code, Status}};
    /// let error = Error::service(Status::default().set_code(Code::FailedPrecondition));
    /// if let Some(status) = error.status() {
    ///     println!("code={} details={:?}", status.code, status.details);
    /// }
    /// ```
    ///
    /// See [AIP-193] for the error model used by Google Cloud services.
    ///
    /// [AIP-193]: https://google.aip.dev/193
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.as_ref().status),
            _ => None,
        }
    }

    /// The response metadata, if any, as [http::HeaderMap].
    ///
    /// Only service and transport errors carry metadata.
    pub fn http_headers(&self) -> Option<&http::HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => Some(&d.as_ref().headers),
            ErrorKind::Service(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(headers: HeaderMap, source: T) -> Self {
        let details = TransportDetails { headers };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// The transport failed before the service sent a full response.
    ///
    /// # Troubleshooting
    ///
    /// Most often the endpoint does not serve the Vertex AI gRPC services,
    /// for example, an HTTP proxy that answers with an HTML page.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot encode the request {e}"),
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the attempt deadline {e}")
            }
            (ErrorKind::Connect, Some(e)) => {
                write!(f, "cannot connect to the service endpoint {e}")
            }
            (ErrorKind::Transport(_), Some(e)) => {
                write!(f, "the transport reports an error: {e}")
            }
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.status.code, d.status.message
                )
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Serialization,
    Timeout,
    Connect,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    headers: HeaderMap,
}

#[derive(Debug)]
struct ServiceDetails {
    headers: Option<HeaderMap>,
    status: Status,
}
