use anyhow::{bail, Context};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::QueryError;
use crate::models::business::{BusinessDetail, BusinessSummary};
use crate::models::restaurant::{RestaurantDetail, SearchResponse};
use crate::models::search_query::SearchQuery;

pub const SEARCH_TERM: &str = "food";
/// Search radius in metres, roughly one mile.
pub const SEARCH_RADIUS: u32 = 1610;

const SEARCH_ENDPOINT: &str = "businesses/search";
const DETAIL_ENDPOINT: &str = "businesses/{id}";
const EXCERPT_LIMIT: usize = 200;

pub struct YelpApiRepo {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
    location: String,
}

/// Top search hit for a name, carried into the detail request.
#[derive(Clone, Debug, PartialEq)]
struct BestMatch {
    id: String,
    distance: f64,
}

impl YelpApiRepo {
    pub fn new(
        base_url: &str,
        api_key: &str,
        location: &str,
    ) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid business search API url: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("Business search API url cannot take a path: {}", base_url);
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            api_key: api_key.to_string(),
            location: location.to_string(),
        })
    }

    /// Appends `segments` to the base url, escaping each one.
    fn endpoint(
        &self,
        segments: &[&str],
    ) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Runs a general search and returns the businesses in API order.
    ///
    /// Rating and count are not sent; the caller filters the list.
    pub async fn search_best(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<BusinessSummary>, QueryError> {
        let mut params = vec![
            ("location", self.location.clone()),
            ("term", SEARCH_TERM.to_string()),
            ("radius", SEARCH_RADIUS.to_string()),
            ("price", query.price_param()),
        ];
        if let Some(category) = query.category.as_deref() {
            params.push(("categories", category.to_string()));
        }

        debug!("Searching businesses with params: {:?}", params);
        let url = self.endpoint(&["businesses", "search"]);
        let response = self.get(url, &params).await?;
        let search: SearchResponse = read_json(SEARCH_ENDPOINT, response).await?;

        Ok(search
            .businesses
            .into_iter()
            .map(BusinessSummary::from)
            .collect())
    }

    /// Finds the closest match for `name` and joins it with its detail record.
    pub async fn lookup_detail(
        &self,
        name: &str,
    ) -> Result<BusinessDetail, QueryError> {
        let best_match = self.find_best_match(name).await?;
        let detail = self.fetch_detail(&best_match).await?;

        let is_open_now = detail
            .is_open_now()
            .ok_or_else(|| QueryError::NotFound(name.to_string()))?;

        Ok(BusinessDetail {
            name: detail.name,
            address1: detail.location.address1.unwrap_or_default(),
            city: detail.location.city,
            state: detail.location.state,
            zip_code: detail.location.zip_code,
            phone: detail.display_phone,
            rating: detail.rating,
            relative_distance: best_match.distance / f64::from(SEARCH_RADIUS),
            is_open_now,
        })
    }

    async fn find_best_match(
        &self,
        name: &str,
    ) -> Result<BestMatch, QueryError> {
        let params = [
            ("location", self.location.clone()),
            ("term", name.to_string()),
            ("radius", SEARCH_RADIUS.to_string()),
            ("limit", "1".to_string()),
        ];

        debug!("Looking up best match for: {}", name);
        let url = self.endpoint(&["businesses", "search"]);
        let response = self.get(url, &params).await?;
        let search: SearchResponse = read_json(SEARCH_ENDPOINT, response).await?;

        let first = search
            .businesses
            .into_iter()
            .next()
            .ok_or_else(|| QueryError::NotFound(name.to_string()))?;
        let distance = first.distance.ok_or_else(|| QueryError::MalformedResponse {
            endpoint: SEARCH_ENDPOINT,
            message: format!("search hit {} has no distance", first.id),
        })?;

        Ok(BestMatch {
            id: first.id,
            distance,
        })
    }

    async fn fetch_detail(
        &self,
        best_match: &BestMatch,
    ) -> Result<RestaurantDetail, QueryError> {
        let url = self.endpoint(&["businesses", best_match.id.as_str()]);
        let response = self.get(url, &[]).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(QueryError::NotFound(best_match.id.clone()));
        }
        read_json(DETAIL_ENDPOINT, response).await
    }

    async fn get(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<reqwest::Response, QueryError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .query(params)
            .send()
            .await?;
        Ok(response)
    }
}

async fn read_json<T: DeserializeOwned>(
    endpoint: &'static str,
    response: reqwest::Response,
) -> Result<T, QueryError> {
    let body = response.error_for_status()?.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| QueryError::MalformedResponse {
        endpoint,
        message: format!("{} (body: {})", e, excerpt(&body)),
    })
}

fn excerpt(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(EXCERPT_LIMIT)
        .collect()
}
