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

//! Helper functions to format the `x-goog-request-params` header.
//!
//! Google Cloud services route each request using the values of some fields
//! in the request, typically the resource name. The values are sent as a
//! URL-encoded query string, where `/` is not escaped.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const ENCODED_CHARS: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Format a list of routing parameters as a header value.
///
/// # Example
/// ```
/// # use google_cloud_gax_internal::routing_parameter::format;
/// let value = format(&[("endpoint", "projects/p/locations/l/endpoints/e")]);
/// assert_eq!(value, "endpoint=projects/p/locations/l/endpoints/e");
/// ```
pub fn format(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, &ENCODED_CHARS).to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case(&[], ""; "empty")]
    #[test_case(&[("parent", "projects/p/locations/l")], "parent=projects/p/locations/l"; "parent")]
    #[test_case(&[("name", "")], "name="; "empty value")]
    #[test_case(&[("endpoint.name", "projects/p")], "endpoint.name=projects/p"; "nested field")]
    #[test_case(&[("parent", "a b&c=d")], "parent=a%20b%26c%3Dd"; "escaped")]
    #[test_case(&[("a", "1"), ("b", "2")], "a=1&b=2"; "many")]
    fn format_params(input: &[(&str, &str)], want: &str) {
        assert_eq!(format(input), want);
    }
}
