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

use gax::options::RequestOptions;
use google_cloud_gax_internal::grpc::Client;
use google_cloud_gax_internal::options::ClientConfig;
use std::time::Duration;

type Result<T> = anyhow::Result<T>;

async fn send_empty(client: &Client, options: RequestOptions) -> gax::Result<()> {
    client
        .execute::<(), ()>(
            tonic::GrpcMethod::new("google.test.v1.TestService", "Ping"),
            http::uri::PathAndQuery::from_static("/google.test.v1.TestService/Ping"),
            (),
            options,
            "gl-rust/test",
            "name=projects/p",
        )
        .await
}

#[tokio::test]
async fn unreachable_endpoint() -> Result<()> {
    // Nothing listens on port 1.
    let config = ClientConfig {
        endpoint: Some("http://127.0.0.1:1".to_string()),
        ..Default::default()
    };
    let client = Client::new(config, "https://aiplatform.googleapis.com").await?;
    let options = RequestOptions::default().with_attempt_timeout(Duration::from_secs(5));
    let err = send_empty(&client, options)
        .await
        .expect_err("the connection should fail");
    assert!(
        err.is_connect() || err.is_transport() || err.is_timeout() || err.status().is_some(),
        "{err:?}"
    );
    Ok(())
}

#[tokio::test]
async fn unreachable_endpoint_with_tracing() -> Result<()> {
    let _guard = tracing::subscriber::set_default(
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish(),
    );
    let config = ClientConfig {
        endpoint: Some("http://127.0.0.1:1".to_string()),
        tracing: true,
        ..Default::default()
    };
    let client = Client::new(config, "https://aiplatform.googleapis.com").await?;
    let options = RequestOptions::default().with_attempt_timeout(Duration::from_secs(5));
    let err = send_empty(&client, options).await;
    assert!(err.is_err(), "{err:?}");
    Ok(())
}
