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

use crate::google;
use gax::error::rpc::{ErrorInfo, Status, StatusDetails};

/// Converts the `google.rpc.Status` proto into the gax representation.
pub(crate) fn status_from_proto(s: google::rpc::Status) -> Status {
    Status::default()
        .set_code(s.code)
        .set_message(s.message)
        .set_details(s.details.into_iter().map(details_from_any))
}

fn details_from_any(any: prost_types::Any) -> StatusDetails {
    match any.to_msg::<google::rpc::ErrorInfo>() {
        Ok(info) => StatusDetails::ErrorInfo(
            ErrorInfo::default()
                .set_reason(info.reason)
                .set_domain(info.domain)
                .set_metadata(info.metadata),
        ),
        Err(_) => StatusDetails::Other {
            type_url: any.type_url,
            value: any.value.into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;
    use pretty_assertions::assert_eq;

    #[test]
    fn with_error_info() -> anyhow::Result<()> {
        let info = google::rpc::ErrorInfo {
            reason: "RESOURCE_EXHAUSTED".into(),
            domain: "aiplatform.googleapis.com".into(),
            metadata: [("quota_limit".to_string(), "100".to_string())].into(),
        };
        let input = google::rpc::Status {
            code: Code::ResourceExhausted as i32,
            message: "quota exceeded".into(),
            details: vec![prost_types::Any::from_msg(&info)?],
        };
        let got = status_from_proto(input);
        let want = Status::default()
            .set_code(Code::ResourceExhausted)
            .set_message("quota exceeded")
            .set_details([ErrorInfo::default()
                .set_reason("RESOURCE_EXHAUSTED")
                .set_domain("aiplatform.googleapis.com")
                .set_metadata([("quota_limit", "100")])]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn unknown_details() {
        let any = prost_types::Any {
            type_url: "type.googleapis.com/google.rpc.DebugInfo".into(),
            value: vec![1, 2, 3],
        };
        let input = google::rpc::Status {
            code: Code::Internal as i32,
            message: "uh-oh".into(),
            details: vec![any],
        };
        let got = status_from_proto(input);
        assert_eq!(got.code, Code::Internal);
        assert_eq!(
            got.details,
            vec![StatusDetails::Other {
                type_url: "type.googleapis.com/google.rpc.DebugInfo".into(),
                value: bytes::Bytes::from_static(&[1, 2, 3]),
            }]
        );
    }
}
