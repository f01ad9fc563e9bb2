use regex::Regex;
use tracing::{error, info, warn};
use url::Url;

use crate::common::prelude::{
    rank_by_points, FetchError, FetchStrategy, Filters, RunOutcome, KEYWORDS,
};
use crate::sender::Sender;

use super::prelude::{Digest, DigestItem, JsonNewsItem, SearchResponse};

/// Trailing window for candidate stories, in days.
const WINDOW_DAYS: i64 = 7;

/// Popularity floor and page bound for the server-side query strategy. The
/// endpoint already filters by keyword, so its page is the digest.
const QUERY_MIN_POINTS: i64 = 50;
const QUERY_PAGE_SIZE: usize = 15;

/// The bulk strategy pulls a wider, lower-scoring page and narrows it
/// locally: keyword filter, rank by points, cap the digest.
const BULK_MIN_POINTS: i64 = 20;
const BULK_PAGE_SIZE: usize = 100;
const BULK_DIGEST_CAP: usize = 10;

pub struct SearchFetcher {
    strategy: FetchStrategy,
    api_base_url: String,
    filters: Vec<Regex>,
}

impl SearchFetcher {
    #[must_use]
    /// Create a new fetcher for the given strategy
    pub fn new(strategy: FetchStrategy) -> SearchFetcher {
        const API_BASE_URL: &str = "https://hn.algolia.com/api/v1";
        Self {
            strategy,
            api_base_url: API_BASE_URL.to_string(),
            filters: Filters::compile(&KEYWORDS),
        }
    }

    #[allow(dead_code)]
    fn with_base_url(&mut self, base_url: String) -> &mut Self {
        self.api_base_url = base_url;
        self
    }

    /// Run one fetch-select-send cycle. Failures on either network edge are
    /// logged and folded into the outcome; nothing propagates as a crash.
    pub async fn run(&self, sender: &Sender, send_empty: bool) -> RunOutcome {
        let digest = match self.fetch().await {
            Ok(digest) => digest,
            Err(e) => {
                warn!(error = %e, "fetch failed, treating this run as empty");
                return RunOutcome::FetchFailed;
            }
        };

        if digest.is_empty() && !send_empty {
            info!("no qualifying stories this week, skipping delivery");
            return RunOutcome::Empty;
        }

        match sender.send_digest(&digest).await {
            Ok(()) => RunOutcome::Sent(digest.len()),
            Err(e) => {
                error!(error = %e, "could not deliver the digest");
                RunOutcome::DeliveryFailed
            }
        }
    }

    /// Fetch the candidate stories for the configured strategy.
    async fn fetch(&self) -> Result<Digest, FetchError> {
        let hits = match self.strategy {
            FetchStrategy::Query => {
                self.search(
                    Some(&Filters::query_expression()),
                    QUERY_MIN_POINTS,
                    QUERY_PAGE_SIZE,
                )
                .await?
            }
            FetchStrategy::Bulk => self.search(None, BULK_MIN_POINTS, BULK_PAGE_SIZE).await?,
        };

        let items: Vec<DigestItem> = hits.into_iter().map(DigestItem::from).collect();

        Ok(match self.strategy {
            FetchStrategy::Query => items,
            FetchStrategy::Bulk => self.select(items),
        })
    }

    /// Submit one search request and decode the hits
    async fn search(
        &self,
        query: Option<&str>,
        min_points: i64,
        page_size: usize,
    ) -> Result<Vec<JsonNewsItem>, FetchError> {
        let url = self.search_url(query, min_points, page_size)?;
        let response = reqwest::get(url)
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await?;

        Ok(response.hits)
    }

    /// Build the search URL: stories only, inside the trailing window, above
    /// the popularity floor, optionally matching the keyword expression.
    fn search_url(
        &self,
        query: Option<&str>,
        min_points: i64,
        page_size: usize,
    ) -> Result<Url, FetchError> {
        let cutoff = chrono::Utc::now().timestamp() - WINDOW_DAYS * 24 * 60 * 60;

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(query) = query {
            params.push(("query", query.to_string()));
        }
        params.push(("tags", String::from("story")));
        params.push((
            "numericFilters",
            format!("points>{min_points},created_at_i>{cutoff}"),
        ));
        params.push(("hitsPerPage", page_size.to_string()));

        let url = Url::parse_with_params(
            &format!("{}/search_by_date", self.api_base_url),
            &params,
        )?;
        Ok(url)
    }

    /// Bulk-strategy selection: keep keyword matches, rank by points
    /// descending, truncate to the digest cap.
    fn select(&self, mut items: Vec<DigestItem>) -> Vec<DigestItem> {
        items.retain(|item| self.keep_item(&item.title));
        rank_by_points(&mut items);
        items.truncate(BULK_DIGEST_CAP);
        items
    }

    /// Keep an item if any keyword filter matches its title
    fn keep_item(&self, title: &str) -> bool {
        for filter in &self.filters {
            if filter.is_match(title) {
                return true;
            }
        }
        false
    }
}
