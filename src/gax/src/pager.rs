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

//! A blocking cursor over the pages of a List RPC.
//!
//! List RPCs, as defined by [AIP-158], return a bounded batch of items and a
//! token to resume the listing. A [Pager] wraps the first response of such an
//! RPC, the request that produced it, and a function to fetch more pages. The
//! pager fetches the remaining pages on demand, one at a time, as the
//! application iterates over the pages or the items.
//!
//! # Example
//! ```
//! # use google_cloud_gax::pager::{Pager, PageableRequest};
//! # use google_cloud_gax::paginator::PageableResponse;
//! #[derive(Clone, Default)]
//! struct ListFoosRequest { parent: String, page_token: String }
//! #[derive(Clone, Debug)]
//! struct ListFoosResponse { foos: Vec<String>, next_page_token: String }
//! # impl PageableRequest for ListFoosRequest {
//! #     fn page_token(&self) -> &str { &self.page_token }
//! #     fn set_page_token(&mut self, token: String) { self.page_token = token; }
//! # }
//! # impl PageableResponse for ListFoosResponse {
//! #     type PageItem = String;
//! #     fn items(self) -> Vec<String> { self.foos }
//! #     fn next_page_token(&self) -> String { self.next_page_token.clone() }
//! # }
//! let first = ListFoosResponse { foos: vec!["a".into()], next_page_token: "t1".into() };
//! let fetch = |req: &ListFoosRequest| -> Result<ListFoosResponse, String> {
//!     assert_eq!(req.page_token, "t1");
//!     Ok(ListFoosResponse { foos: vec!["b".into()], next_page_token: String::new() })
//! };
//! let pager = Pager::new(fetch, ListFoosRequest::default(), first);
//! let items = pager.into_iter().collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(items, vec!["a", "b"]);
//! # Ok::<(), String>(())
//! ```
//!
//! [AIP-158]: https://google.aip.dev/158

use crate::paginator::PageableResponse;

/// Describes the request of a List RPC.
///
/// The pager only changes the page token between fetches, all other fields
/// (the parent, the filter, the page size) are sent unchanged on every page.
pub trait PageableRequest {
    /// The token of the page requested, empty for the first page.
    fn page_token(&self) -> &str;

    /// Changes the page requested.
    fn set_page_token(&mut self, token: String);
}

/// A cursor over the pages of a List RPC.
///
/// The pager retains exactly one response: initially the response given to
/// [Pager::new], then the response of the most recent fetch. Each call to
/// advance the cursor performs at most one (blocking) call to `method`.
///
/// The pager does not bound the number of pages. A service that always
/// returns a non-empty `next_page_token` produces an endless sequence, use
/// [Iterator::take] or similar to bound the iteration.
///
/// The pager is not restartable: once a page is returned it is never fetched
/// again. Create a new pager, typically by calling the client method again,
/// to start over.
///
/// Items not yet consumed through [Pager::items] stay in the pager, a later
/// call to [Pager::items] resumes with them.
pub struct Pager<Req, Resp, F>
where
    Resp: PageableResponse,
{
    method: F,
    request: Req,
    response: Resp,
    state: State,
    // Unread items of the last page returned to an item iterator.
    buffered: std::vec::IntoIter<Resp::PageItem>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    // The response given at construction has not been returned yet.
    Start,
    // The retained response has been returned, fetch the next one.
    Fetch,
    // No more pages, or a fetch failed.
    Done,
}

impl<Req, Resp, F, E> Pager<Req, Resp, F>
where
    Req: PageableRequest,
    Resp: PageableResponse + Clone,
    F: FnMut(&Req) -> Result<Resp, E>,
{
    /// Creates a pager from the first page of a List RPC.
    ///
    /// This performs no I/O, the caller has already fetched `response` using
    /// `request`. Further pages are fetched by calling `method` with a copy of
    /// `request` where only the page token changes.
    pub fn new(method: F, request: Req, response: Resp) -> Self {
        Self {
            method,
            request,
            response,
            state: State::Start,
            buffered: Vec::new().into_iter(),
        }
    }

    /// The most recent response.
    ///
    /// Before any fetch this is the response given to [Pager::new]. After the
    /// pager fetches more pages this is the latest page, not the first one.
    /// Any page-level metadata (such as the number of unreachable locations
    /// in some services) reflects the latest page too.
    pub fn response(&self) -> &Resp {
        &self.response
    }

    /// The request used to fetch the most recent response.
    pub fn request(&self) -> &Req {
        &self.request
    }

    /// Returns the next page, fetching it if needed.
    ///
    /// Returns `None` when there are no more pages. If the fetch fails the
    /// error is returned and the pager is exhausted, the retained response is
    /// unchanged.
    ///
    /// Any items of the previous page not yet consumed through
    /// [Pager::items] are discarded.
    pub fn next_page(&mut self) -> Option<Result<Resp, E>> {
        self.buffered = Vec::new().into_iter();
        match self.state {
            State::Done => None,
            State::Start => {
                self.state = self.state_after_page();
                Some(Ok(self.response.clone()))
            }
            State::Fetch => {
                let token = self.response.next_page_token();
                tracing::trace!(page_token = %token, "fetching next page");
                self.request.set_page_token(token);
                match (self.method)(&self.request) {
                    Ok(response) => {
                        self.response = response;
                        self.state = self.state_after_page();
                        Some(Ok(self.response.clone()))
                    }
                    Err(e) => {
                        self.state = State::Done;
                        Some(Err(e))
                    }
                }
            }
        }
    }

    /// Returns an iterator over the remaining pages.
    ///
    /// The iterator borrows the pager, use [Pager::response] after (or in
    /// between) iterations to inspect the latest page. Like
    /// [Pager::next_page], it discards items buffered by [Pager::items].
    pub fn pages(&mut self) -> Pages<'_, Req, Resp, F> {
        Pages { pager: self }
    }

    /// Returns an iterator over the items in the remaining pages.
    ///
    /// The items are returned in the order of the pages, and within each page
    /// in the order returned by the service. A failed fetch is returned as an
    /// `Err` item, and ends the iteration. Dropping the iterator keeps the
    /// unread items of the current page in the pager.
    pub fn items(&mut self) -> Items<'_, Req, Resp, F> {
        Items { pager: self }
    }

    fn next_item(&mut self) -> Option<Result<Resp::PageItem, E>> {
        loop {
            if let Some(item) = self.buffered.next() {
                return Some(Ok(item));
            }
            match self.next_page()? {
                Ok(page) => self.buffered = page.items().into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }

    fn state_after_page(&self) -> State {
        if self.response.next_page_token().is_empty() {
            State::Done
        } else {
            State::Fetch
        }
    }
}

impl<Req, Resp, F> std::fmt::Debug for Pager<Req, Resp, F>
where
    Resp: PageableResponse + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("response", &self.response)
            .finish()
    }
}

/// An iterator over the pages of a [Pager].
pub struct Pages<'a, Req, Resp, F>
where
    Resp: PageableResponse,
{
    pager: &'a mut Pager<Req, Resp, F>,
}

impl<Req, Resp, F, E> Iterator for Pages<'_, Req, Resp, F>
where
    Req: PageableRequest,
    Resp: PageableResponse + Clone,
    F: FnMut(&Req) -> Result<Resp, E>,
{
    type Item = Result<Resp, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pager.next_page()
    }
}

/// An iterator over the items of a [Pager].
pub struct Items<'a, Req, Resp, F>
where
    Resp: PageableResponse,
{
    pager: &'a mut Pager<Req, Resp, F>,
}

impl<Req, Resp, F, E> Iterator for Items<'_, Req, Resp, F>
where
    Req: PageableRequest,
    Resp: PageableResponse + Clone,
    F: FnMut(&Req) -> Result<Resp, E>,
{
    type Item = Result<Resp::PageItem, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pager.next_item()
    }
}

/// An owning iterator over the items of a [Pager].
pub struct IntoItems<Req, Resp, F>
where
    Resp: PageableResponse,
{
    pager: Pager<Req, Resp, F>,
}

impl<Req, Resp, F> IntoItems<Req, Resp, F>
where
    Resp: PageableResponse,
{
    /// The most recent response, see [Pager::response].
    pub fn response(&self) -> &Resp {
        &self.pager.response
    }
}

impl<Req, Resp, F, E> Iterator for IntoItems<Req, Resp, F>
where
    Req: PageableRequest,
    Resp: PageableResponse + Clone,
    F: FnMut(&Req) -> Result<Resp, E>,
{
    type Item = Result<Resp::PageItem, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pager.next_item()
    }
}

impl<Req, Resp, F, E> IntoIterator for Pager<Req, Resp, F>
where
    Req: PageableRequest,
    Resp: PageableResponse + Clone,
    F: FnMut(&Req) -> Result<Resp, E>,
{
    type Item = Result<Resp::PageItem, E>;
    type IntoIter = IntoItems<Req, Resp, F>;

    fn into_iter(self) -> Self::IntoIter {
        IntoItems { pager: self }
    }
}
