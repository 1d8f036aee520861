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

//! Per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, some calls need a different configuration. Applications
//! sometimes change the timeout for a specific call, or add a prefix to the
//! user agent. Each client method receives a [RequestOptions] value for this
//! purpose.

use std::time::Duration;

/// A set of options configuring a single request.
///
/// # Example
/// ```
/// # use google_cloud_gax::options::RequestOptions;
/// use std::time::Duration;
/// let mut options = RequestOptions::default();
/// options.set_attempt_timeout(Duration::from_secs(30));
/// options.set_user_agent("my-application/1.0");
/// assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(30)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
}

impl RequestOptions {
    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for the request.
    ///
    /// The client libraries do not retry requests, each request is a single
    /// attempt.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    /// Returns a copy of these options with the timeout set.
    pub fn with_attempt_timeout<T: Into<Duration>>(mut self, v: T) -> Self {
        self.set_attempt_timeout(v);
        self
    }

    /// Returns a copy of these options with the user agent prefix set.
    pub fn with_user_agent<T: Into<String>>(mut self, v: T) -> Self {
        self.set_user_agent(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = RequestOptions::default();
        assert_eq!(options.user_agent(), &None);
        assert_eq!(options.attempt_timeout(), &None);
    }

    #[test]
    fn setters() {
        let mut options = RequestOptions::default();
        options.set_user_agent("test-only");
        options.set_attempt_timeout(Duration::from_secs(42));
        assert_eq!(options.user_agent().as_deref(), Some("test-only"));
        assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(42)));
    }

    #[test]
    fn builders() {
        let options = RequestOptions::default()
            .with_user_agent("test-only")
            .with_attempt_timeout(Duration::from_millis(250));
        let mut want = RequestOptions::default();
        want.set_user_agent("test-only");
        want.set_attempt_timeout(Duration::from_millis(250));
        assert_eq!(options, want);
    }
}
