// src/resolver/mod.rs

//! Search and fallback resolver.
//!
//! Turns user filters into a final, never-empty, paginated result set:
//! builds the query, runs the primary search, applies the local year
//! filter in probe batches, and substitutes the curated highlights set
//! when nothing usable remains.

mod dates;

use std::time::Duration;

use futures::stream::{self, StreamExt};
use rand::seq::SliceRandom;

use crate::client::CollectionApi;
use crate::error::{AppError, Result};
use crate::models::{ArtworkRecord, Config, ObjectId, PageWindow, SearchFilters, SearchResult};
use crate::pager;
use crate::query::{self, SearchQuery};

/// Resolves searches against a collection backend.
pub struct Resolver<C> {
    api: C,
    config: Config,
}

impl<C: CollectionApi + Send + Sync> Resolver<C> {
    /// Create a resolver over the given backend.
    pub fn new(api: C, config: Config) -> Self {
        Self { api, config }
    }

    /// Access the underlying backend (department listing, raw lookups).
    pub fn api(&self) -> &C {
        &self.api
    }

    /// Resolve filters into a candidate list, applying the fallback rule.
    ///
    /// A transport failure on the search endpoint aborts the resolve so
    /// callers can distinguish "no matches, showing highlights" from
    /// "search is unreachable". A malformed search payload counts as
    /// zero candidates and takes the fallback path.
    pub async fn resolve(
        &self,
        filters: &SearchFilters,
        page: &PageWindow,
    ) -> Result<SearchResult> {
        let query = query::build(filters);

        // Browse-all: never issue an unconstrained full-collection search
        if query.is_unconstrained() {
            log::info!("Unconstrained search, serving highlights");
            return self.fallback_result(filters).await;
        }

        // An inverted year range matches nothing by definition
        if filters.year_range_inverted() {
            log::info!("Inverted year range, serving highlights");
            return self.fallback_result(filters).await;
        }

        let ids = match self.primary_search(&query).await {
            Ok(ids) => ids,
            Err(error) if error.is_malformed() => {
                log::warn!("Search payload undecodable, treating as empty: {}", error);
                Vec::new()
            }
            Err(error) => return Err(error),
        };
        log::debug!("Primary search returned {} candidates", ids.len());

        let mut result = if filters.has_year_range() {
            // Year filtering needs record details, so scan lazily in
            // batches instead of hydrating the whole candidate list
            let mut result = SearchResult::from_candidates(Vec::new(), filters.clone());
            result.unscanned_ids = ids;
            self.scan_for_matches(&mut result, page.upper_bound()).await;
            result
        } else {
            SearchResult::from_candidates(ids, filters.clone())
        };

        if result.is_empty() {
            log::info!("No usable candidates, serving highlights");
            result = self.fallback_result(filters).await?;
        }

        Ok(result)
    }

    /// Hydrate the records for one page window, in candidate order.
    ///
    /// Individual detail failures drop that item from the page rather
    /// than failing the whole fetch. Under a year filter, paging into
    /// unscanned candidates continues the probe scan first.
    pub async fn fetch_page(
        &self,
        result: &mut SearchResult,
        page: &PageWindow,
    ) -> Result<Vec<ArtworkRecord>> {
        if result.applied_filters.has_year_range() && !result.unscanned_ids.is_empty() {
            self.scan_for_matches(result, page.upper_bound()).await;
        }

        let view = pager::window(result.total_count, page);
        let slice = &result.candidate_ids[view.start..view.end];
        Ok(self.fetch_details(slice).await)
    }

    /// Pick one random artwork from the curated highlights set.
    pub async fn surprise_me(&self) -> Result<SearchResult> {
        let highlights = self.fallback_search().await?;
        let pick = highlights.choose(&mut rand::thread_rng()).copied();

        let candidates = pick.map(|id| vec![id]).unwrap_or_default();
        Ok(SearchResult::from_fallback(
            candidates,
            SearchFilters::default(),
        ))
    }

    /// Keyword-only resolve on an artist's display name.
    pub async fn more_by_artist(
        &self,
        artist: &str,
        page: &PageWindow,
    ) -> Result<SearchResult> {
        self.resolve(&SearchFilters::keyword_only(artist), page).await
    }

    /// The user-driven search, as built by the query builder.
    pub async fn primary_search(&self, query: &SearchQuery) -> Result<Vec<ObjectId>> {
        self.api.search(query).await
    }

    /// The curated highlights query backing the never-empty guarantee.
    /// Ignores keyword, department, and year constraints entirely.
    pub async fn fallback_search(&self) -> Result<Vec<ObjectId>> {
        self.api.search(&SearchQuery::highlights()).await
    }

    async fn fallback_result(&self, filters: &SearchFilters) -> Result<SearchResult> {
        let ids = self.fallback_search().await?;
        Ok(SearchResult::from_fallback(ids, filters.clone()))
    }

    /// Probe unscanned candidates in page-sized batches until the window
    /// up to `target` is covered, candidates run out, or the batch cap
    /// is reached.
    async fn scan_for_matches(&self, result: &mut SearchResult, target: usize) {
        let from = result.applied_filters.year_from;
        let to = result.applied_filters.year_to;
        let batch_size = self.config.search.page_size.max(1);
        let mut batches = 0;

        while result.candidate_ids.len() < target
            && !result.unscanned_ids.is_empty()
            && batches < self.config.search.max_probe_batches
        {
            let take = batch_size.min(result.unscanned_ids.len());
            let batch: Vec<ObjectId> = result.unscanned_ids.drain(..take).collect();

            for record in self.fetch_details(&batch).await {
                if dates::in_range(&record.object_date, from, to) {
                    result.candidate_ids.push(record.id);
                }
            }
            batches += 1;
        }

        result.total_count = result.candidate_ids.len();
        log::debug!(
            "Year scan: {} matches, {} candidates unscanned",
            result.total_count,
            result.unscanned_ids.len()
        );
    }

    /// Fetch details for the given ids concurrently, preserving order.
    ///
    /// `buffered` (not `buffer_unordered`) joins completions back in
    /// source order. Failed ids are dropped, not propagated.
    async fn fetch_details(&self, ids: &[ObjectId]) -> Vec<ArtworkRecord> {
        let concurrency = self.config.api.max_concurrent.max(1);
        let delay = Duration::from_millis(self.config.api.request_delay_ms);

        let mut records = Vec::with_capacity(ids.len());
        let mut detail_stream = stream::iter(ids.iter().copied())
            .map(|id| async move { (id, self.api.get_object(id).await) })
            .buffered(concurrency);

        while let Some((id, fetched)) = detail_stream.next().await {
            match fetched {
                Ok(record) => records.push(record),
                Err(AppError::NotFound(_)) => {
                    log::debug!("Object {} no longer exists, dropping from page", id);
                }
                Err(error) => {
                    log::warn!("Failed to fetch object {}: {}", id, error);
                }
            }

            if delay.as_millis() > 0 {
                tokio::time::sleep(delay).await;
            }
        }

        records
    }
}
