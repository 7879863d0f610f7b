//! View state and the rules for when it fetches.
//!
//! [`NewsController`] owns the filter state, the loading flag and the
//! article list. Fetches start on mount, when the category or country
//! changes, and when a search is submitted. Typing a query does not fetch.
//!
//! Every fetch is tagged with a sequence number. A completion is applied
//! only when its number is the latest one issued, so a slow response to an
//! old request can never overwrite a newer page.

use crate::api::{FailurePolicy, NewsSource};
use crate::error::{FetchError, FetchErrorKind};
use crate::models::{Article, Category, Country, FilterState};
use tracing::{debug, info, instrument};

/// Handle for one in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    /// Filters as they were when the fetch started.
    pub filters: FilterState,
}

/// Owns everything the page renders from.
#[derive(Debug)]
pub struct NewsController<S> {
    source: S,
    policy: FailurePolicy,
    filters: FilterState,
    loading: bool,
    articles: Vec<Article>,
    latest_seq: u64,
    last_error: Option<FetchErrorKind>,
}

impl<S: NewsSource> NewsController<S> {
    pub fn new(source: S, filters: FilterState) -> Self {
        Self {
            source,
            policy: FailurePolicy::default(),
            filters,
            loading: false,
            articles: Vec::new(),
            latest_seq: 0,
            last_error: None,
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Kind of the most recent applied failure, cleared by the next success.
    pub fn last_error(&self) -> Option<FetchErrorKind> {
        self.last_error
    }

    /// Initial fetch when the view first appears.
    pub fn mount(&mut self) -> FetchTicket {
        self.begin_fetch()
    }

    /// Update the query text without fetching.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
    }

    /// Fetch with the current filters, as the search button does.
    pub fn submit_search(&mut self) -> FetchTicket {
        self.begin_fetch()
    }

    /// Change the category; starts a fetch only if the value actually changed.
    pub fn set_category(&mut self, category: Category) -> Option<FetchTicket> {
        if self.filters.category == category {
            return None;
        }
        self.filters.category = category;
        Some(self.begin_fetch())
    }

    /// Change the country; starts a fetch only if the value actually changed.
    pub fn set_country(&mut self, country: Country) -> Option<FetchTicket> {
        if self.filters.country == country {
            return None;
        }
        self.filters.country = country;
        Some(self.begin_fetch())
    }

    /// Await the source for `ticket` and apply the outcome.
    ///
    /// The controller stays in the loading state until this returns, so a
    /// caller can render the page between starting a fetch and running it.
    #[instrument(level = "info", skip_all, fields(seq = ticket.seq))]
    pub async fn run(&mut self, ticket: FetchTicket) -> bool {
        let result = self.source.fetch(&ticket.filters).await;
        self.complete_fetch(&ticket, result)
    }

    /// Enter the loading state and hand out a ticket for a new fetch.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.loading = true;
        debug!(seq = self.latest_seq, "Fetch started");
        FetchTicket {
            seq: self.latest_seq,
            filters: self.filters.clone(),
        }
    }

    /// Apply a fetch outcome. Returns `false` if a newer fetch has been
    /// started since `ticket` was issued, in which case nothing changes.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<Article>, FetchError>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                "Discarding stale response"
            );
            return false;
        }

        let settled = self.policy.settle(result);
        info!(
            seq = ticket.seq,
            count = settled.articles.len(),
            error = ?settled.error,
            "Applied fetch result"
        );
        self.articles = settled.articles;
        self.last_error = settled.error;
        self.loading = false;
        true
    }
}
