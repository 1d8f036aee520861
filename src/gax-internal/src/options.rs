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
/// The configuration consumed by [crate::grpc::Client].
pub type ClientConfig = gax::client_builder::internal::ClientConfig;

/// Set to `true` to trace every RPC, even for clients built without
/// `with_tracing()`.
pub(crate) const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

pub fn tracing_enabled(config: &ClientConfig) -> bool {
    config.tracing || std::env::var(LOGGING_VAR).is_ok_and(|v| v == "true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use test_case::test_case;

    #[test_case(false, None, false; "default")]
    #[test_case(true, None, true; "builder")]
    #[test_case(false, Some("true"), true; "environment")]
    #[test_case(false, Some("1"), false; "only true enables")]
    #[test_case(true, Some("false"), true; "builder wins")]
    #[serial_test::serial]
    fn tracing(with_tracing: bool, env: Option<&str>, want: bool) {
        let _e = match env {
            Some(v) => ScopedEnv::set(LOGGING_VAR, v),
            None => ScopedEnv::remove(LOGGING_VAR),
        };
        let config = ClientConfig {
            tracing: with_tracing,
            ..Default::default()
        };
        assert_eq!(tracing_enabled(&config), want, "{config:?} {env:?}");
    }
}
