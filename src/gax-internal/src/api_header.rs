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

//! Telemetry header helpers.

/// Generated libraries create one static instance of this struct and use it
/// to lazy initialize (via [std::sync::LazyLock]) the x-goog-api-client header
/// value.
#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

pub const GAPIC: &str = "gapic";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl XGoogApiClient {
    /// Format the struct as needed for the `x-goog-api-client` header.
    ///
    /// The value lists the language and compiler version, the version of this
    /// crate (as `gax` and as the `grpc` transport), and the client library
    /// version.
    pub fn grpc_header_value(&self) -> String {
        let rustc_version = build_info::RUSTC_VERSION;
        let rustc_version = rustc_version
            .strip_prefix("rustc ")
            .unwrap_or(rustc_version);
        let gax_version = build_info::PKG_VERSION;
        format!(
            "gl-rust/{rustc_version} gax/{gax_version} grpc/{gax_version}-tonic {}/{}",
            self.library_type, self.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn breakdown(formatted: &str) -> HashMap<String, String> {
        formatted
            .split(' ')
            .filter_map(|v| v.split_once('/'))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn grpc_format() {
        let header = XGoogApiClient {
            name: "google-cloud-aiplatform-v1beta1",
            version: "1.2.3",
            library_type: GAPIC,
        };
        let fields = breakdown(header.grpc_header_value().as_str());

        assert_eq!(fields.get(GAPIC).map(String::as_str), Some("1.2.3"));
        assert_eq!(
            fields.get("gax").map(String::as_str),
            Some(build_info::PKG_VERSION)
        );
        let want = format!("{}-tonic", build_info::PKG_VERSION);
        assert_eq!(fields.get("grpc"), Some(&want));
        assert!(fields.get("rest").is_none(), "{fields:?}");

        let got = fields.get("gl-rust").map(String::as_str).unwrap_or_default();
        assert!(
            !got.is_empty() && build_info::RUSTC_VERSION.contains(got),
            "mismatched rustc version {} and {got}",
            build_info::RUSTC_VERSION
        );
    }
}
