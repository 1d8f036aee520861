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

#[cfg(all(test, feature = "pipeline-service"))]
mod tests {
    use gax::options::RequestOptions;
    use google_cloud_aiplatform_v1beta1::model::*;
    use google_cloud_aiplatform_v1beta1::{Result, blocking, client, stub};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};
    use test_case::test_case;

    const PARENT: &str = "projects/test-project/locations/us-central1";

    mockall::mock! {
        #[derive(Debug)]
        PipelineService {}
        impl stub::PipelineService for PipelineService {
            async fn create_training_pipeline(&self, req: CreateTrainingPipelineRequest, options: RequestOptions) -> Result<TrainingPipeline>;
            async fn list_training_pipelines(&self, req: ListTrainingPipelinesRequest, options: RequestOptions) -> Result<ListTrainingPipelinesResponse>;
            async fn cancel_training_pipeline(&self, req: CancelTrainingPipelineRequest, options: RequestOptions) -> Result<()>;
        }
    }

    fn pipeline(id: &str, state: PipelineState) -> TrainingPipeline {
        let mut p = TrainingPipeline {
            name: format!("{PARENT}/trainingPipelines/{id}"),
            display_name: id.to_string(),
            ..Default::default()
        };
        p.set_state(state);
        p
    }

    // A deterministic service, the page for token `tN` contains pipeline `pN`
    // and points to `t{N+1}`, up to `last`.
    fn paged_service(
        last: usize,
        tokens: Arc<Mutex<Vec<String>>>,
    ) -> impl Fn(ListTrainingPipelinesRequest, RequestOptions) -> Result<ListTrainingPipelinesResponse>
    + Send
    + 'static {
        move |req, _| {
            tokens.lock().expect("not poisoned").push(req.page_token.clone());
            let n = req
                .page_token
                .strip_prefix('t')
                .and_then(|n| n.parse::<usize>().ok())
                .unwrap_or(0);
            let next = if n + 1 < last {
                format!("t{}", n + 1)
            } else {
                String::new()
            };
            Ok(ListTrainingPipelinesResponse {
                training_pipelines: vec![pipeline(&format!("p{n}"), PipelineState::Succeeded)],
                next_page_token: next,
            })
        }
    }

    fn blocking_client(mock: MockPipelineService) -> anyhow::Result<blocking::PipelineService> {
        Ok(blocking::PipelineService::from_client(
            client::PipelineService::from_stub(mock),
        )?)
    }

    fn list_request() -> ListTrainingPipelinesRequest {
        ListTrainingPipelinesRequest {
            parent: PARENT.to_string(),
            page_size: 1,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_training_pipeline() -> anyhow::Result<()> {
        let mut mock = MockPipelineService::new();
        mock.expect_create_training_pipeline()
            .withf(|r, _| r.parent == PARENT)
            .return_once(|r, _| {
                let mut p = r.training_pipeline.unwrap_or_default();
                p.name = format!("{PARENT}/trainingPipelines/new");
                p.set_state(PipelineState::Queued);
                Ok(p)
            });
        let client = client::PipelineService::from_stub(mock);
        let got = client
            .create_training_pipeline(
                CreateTrainingPipelineRequest {
                    parent: PARENT.to_string(),
                    training_pipeline: Some(TrainingPipeline {
                        display_name: "new".into(),
                        ..Default::default()
                    }),
                },
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(got, pipeline("new", PipelineState::Queued));
        Ok(())
    }

    #[test]
    fn blocking_cancel_training_pipeline() -> anyhow::Result<()> {
        let mut mock = MockPipelineService::new();
        mock.expect_cancel_training_pipeline()
            .withf(|r, _| r.name.ends_with("/trainingPipelines/p0"))
            .times(1)
            .returning(|_, _| Ok(()));
        let client = blocking_client(mock)?;
        client.cancel_training_pipeline(
            CancelTrainingPipelineRequest {
                name: format!("{PARENT}/trainingPipelines/p0"),
            },
            RequestOptions::default(),
        )?;
        Ok(())
    }

    #[test_case(1; "single page")]
    #[test_case(2; "two pages")]
    #[test_case(5; "five pages")]
    fn blocking_list_training_pipelines(last: usize) -> anyhow::Result<()> {
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let mut mock = MockPipelineService::new();
        mock.expect_list_training_pipelines()
            .times(last)
            .returning(paged_service(last, tokens.clone()));
        let client = blocking_client(mock)?;
        let pager = client.list_training_pipelines(list_request(), RequestOptions::default())?;
        let got = pager
            .into_iter()
            .map(|p| p.map(|p| p.display_name))
            .collect::<Result<Vec<_>>>()?;
        let want = (0..last).map(|n| format!("p{n}")).collect::<Vec<_>>();
        assert_eq!(got, want);

        // Each request uses the token from the previous response.
        let want = std::iter::once(String::new())
            .chain((1..last).map(|n| format!("t{n}")))
            .collect::<Vec<_>>();
        assert_eq!(*tokens.lock().expect("not poisoned"), want);
        Ok(())
    }

    #[test]
    fn blocking_latest_response() -> anyhow::Result<()> {
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let mut mock = MockPipelineService::new();
        mock.expect_list_training_pipelines()
            .returning(paged_service(3, tokens));
        let client = blocking_client(mock)?;
        let mut pager = client.list_training_pipelines(list_request(), RequestOptions::default())?;
        assert_eq!(pager.response().next_page_token, "t1");
        let _first = pager.next_page().transpose()?;
        assert_eq!(pager.response().next_page_token, "t1");
        let _second = pager.next_page().transpose()?;
        assert_eq!(pager.response().next_page_token, "t2");
        assert_eq!(pager.request().page_size, 1);
        assert_eq!(pager.request().parent, PARENT);
        Ok(())
    }

    #[test]
    fn blocking_replay() -> anyhow::Result<()> {
        let collect = || -> anyhow::Result<Vec<ListTrainingPipelinesResponse>> {
            let mut mock = MockPipelineService::new();
            mock.expect_list_training_pipelines()
                .returning(paged_service(4, Arc::new(Mutex::new(Vec::new()))));
            let client = blocking_client(mock)?;
            let mut pager =
                client.list_training_pipelines(list_request(), RequestOptions::default())?;
            Ok(pager.pages().collect::<Result<Vec<_>>>()?)
        };
        let first = collect()?;
        let second = collect()?;
        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn pager_debug() -> anyhow::Result<()> {
        let mut mock = MockPipelineService::new();
        mock.expect_list_training_pipelines()
            .returning(paged_service(1, Arc::new(Mutex::new(Vec::new()))));
        let client = blocking_client(mock)?;
        let pager = client.list_training_pipelines(list_request(), RequestOptions::default())?;
        let fmt = format!("{pager:?}");
        assert!(fmt.contains("Pager"), "{fmt}");
        assert!(fmt.contains("p0"), "{fmt}");
        Ok(())
    }
}
