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

use std::collections::HashMap;

/// The error reported by a Google Cloud service.
///
/// Mirrors the `google.rpc.Status` message carried in the gRPC trailers, see
/// [AIP-193](https://google.aip.dev/193).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Status {
    /// The status code.
    pub code: Code,

    /// A developer-facing message, in English.
    pub message: String,

    /// Structured details, such as the [ErrorInfo] with the failure reason.
    pub details: Vec<StatusDetails>,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [details][Status::details].
    pub fn set_details<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<StatusDetails>,
    {
        self.details = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

/// The gRPC status codes.
///
/// Values outside the known range map to [Code::Unknown].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum Code {
    /// Not an error; returned on success.
    Ok = 0,

    /// The operation was cancelled, typically by the caller.
    Cancelled = 1,

    /// Unknown error. Also used when the service returns a code outside of
    /// the known range.
    #[default]
    Unknown = 2,

    /// The client specified an invalid argument.
    InvalidArgument = 3,

    /// The deadline expired before the operation could complete.
    DeadlineExceeded = 4,

    /// Some requested entity (e.g., an endpoint or a pipeline) was not found.
    NotFound = 5,

    /// The entity that a client attempted to create already exists.
    AlreadyExists = 6,

    /// The caller does not have permission to execute the specified
    /// operation.
    PermissionDenied = 7,

    /// Some resource has been exhausted, perhaps a per-user quota.
    ResourceExhausted = 8,

    /// The operation was rejected because the system is not in a state
    /// required for the operation's execution.
    FailedPrecondition = 9,

    /// The operation was aborted, typically due to a concurrency issue.
    Aborted = 10,

    /// The operation was attempted past the valid range.
    OutOfRange = 11,

    /// The operation is not implemented or is not supported/enabled in this
    /// service.
    Unimplemented = 12,

    /// Internal errors.  This means that some invariants expected by the
    /// underlying system have been broken.
    Internal = 13,

    /// The service is currently unavailable.  This is most likely a
    /// transient condition.
    Unavailable = 14,

    /// Unrecoverable data loss or corruption.
    DataLoss = 15,

    /// The request does not have valid authentication credentials for the
    /// operation.
    Unauthenticated = 16,
}

impl Code {
    pub fn name(&self) -> &str {
        match self {
            Code::Ok => "OK",
            Code::Cancelled => "CANCELLED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

impl std::convert::From<i32> for Code {
    fn from(value: i32) -> Self {
        match value {
            0 => Code::Ok,
            1 => Code::Cancelled,
            2 => Code::Unknown,
            3 => Code::InvalidArgument,
            4 => Code::DeadlineExceeded,
            5 => Code::NotFound,
            6 => Code::AlreadyExists,
            7 => Code::PermissionDenied,
            8 => Code::ResourceExhausted,
            9 => Code::FailedPrecondition,
            10 => Code::Aborted,
            11 => Code::OutOfRange,
            12 => Code::Unimplemented,
            13 => Code::Internal,
            14 => Code::Unavailable,
            15 => Code::DataLoss,
            16 => Code::Unauthenticated,
            _ => Code::default(),
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The type of details associated with [Status].
///
/// Google Cloud RPCs often return a detailed error description. These
/// details can be used to better understand the root cause of the problem.
/// Only `google.rpc.ErrorInfo` is decoded, any other detail is preserved in
/// its serialized form.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum StatusDetails {
    ErrorInfo(ErrorInfo),
    Other {
        /// The `type.googleapis.com/...` URL identifying the detail type.
        type_url: String,
        /// The serialized detail message.
        value: bytes::Bytes,
    },
}

impl From<ErrorInfo> for StatusDetails {
    fn from(value: ErrorInfo) -> Self {
        Self::ErrorInfo(value)
    }
}

/// Describes the cause of the error with structured details.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ErrorInfo {
    /// The reason of the error, a constant value in `UPPER_SNAKE_CASE`.
    pub reason: String,
    /// The logical grouping to which the "reason" belongs, typically the
    /// service name, e.g. `aiplatform.googleapis.com`.
    pub domain: String,
    /// Additional structured details about this error.
    pub metadata: HashMap<String, String>,
}

impl ErrorInfo {
    /// Sets the value for [reason][ErrorInfo::reason].
    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = v.into();
        self
    }

    /// Sets the value for [domain][ErrorInfo::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = v.into();
        self
    }

    /// Sets the value for [metadata][ErrorInfo::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, Code::Ok)]
    #[test_case(3, Code::InvalidArgument)]
    #[test_case(5, Code::NotFound)]
    #[test_case(14, Code::Unavailable)]
    #[test_case(16, Code::Unauthenticated)]
    #[test_case(17, Code::Unknown)]
    #[test_case(-1, Code::Unknown)]
    fn code_from_i32(input: i32, want: Code) {
        assert_eq!(Code::from(input), want);
    }

    #[test_case(Code::Ok, "OK")]
    #[test_case(Code::NotFound, "NOT_FOUND")]
    #[test_case(Code::FailedPrecondition, "FAILED_PRECONDITION")]
    #[test_case(Code::Unauthenticated, "UNAUTHENTICATED")]
    fn code_name(code: Code, want: &str) {
        assert_eq!(code.name(), want);
        assert_eq!(code.to_string(), want);
    }

    #[test]
    fn code_values() {
        for value in 0..=16 {
            assert_eq!(Code::from(value) as i32, value);
        }
    }

    #[test]
    fn status_setters() {
        let info = ErrorInfo::default()
            .set_reason("RESOURCE_EXHAUSTED")
            .set_domain("aiplatform.googleapis.com")
            .set_metadata([("quota", "endpoints")]);
        let status = Status::default()
            .set_code(Code::ResourceExhausted)
            .set_message("too many endpoints")
            .set_details([info.clone()]);
        assert_eq!(status.code, Code::ResourceExhausted);
        assert_eq!(status.message, "too many endpoints");
        assert_eq!(status.details, vec![StatusDetails::ErrorInfo(info)]);
    }
}
