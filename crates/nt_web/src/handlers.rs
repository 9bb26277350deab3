use axum::{
    extract::{OriginalUri, Query, State},
    response::IntoResponse,
    Json,
};
use std::num::NonZeroU32;
use std::sync::Arc;
use nt_core::{Error, GroupedArticles, SearchResult, TimeUnit};
use serde::Deserialize;
use serde_json::json;
use crate::error::{UNEXPECTED_WHILE_GROUPING, UNEXPECTED_WHILE_SETTING_MODE};
use crate::{ApiError, AppState};

const DEFAULT_INTERVAL: u32 = 12;
const DEFAULT_UNIT: TimeUnit = TimeUnit::Hours;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    keyword: String,
}

#[derive(Debug, Deserialize)]
pub struct GroupQuery {
    #[serde(default)]
    keyword: String,
    interval: Option<String>,
    unit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ModeQuery {
    #[serde(default)]
    mode: String,
}

pub async fn search_news(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResult>, ApiError> {
    tracing::info!("Starting news search for keyword: {}", query.keyword);
    state
        .manager
        .search(&query.keyword)
        .await
        .map(Json)
        .map_err(|e| ApiError::new(e, uri.path()))
}

pub async fn group_news(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<GroupQuery>,
) -> Result<Json<GroupedArticles>, ApiError> {
    let api_error = |e| ApiError::new(e, uri.path()).with_unexpected(UNEXPECTED_WHILE_GROUPING);
    let (interval, unit) = parse_grouping(&query).map_err(api_error)?;
    tracing::info!(
        "Grouping news articles for keyword: {}, interval: {}, unit: {}",
        query.keyword,
        interval,
        unit
    );
    state
        .manager
        .grouped_search(&query.keyword, interval, unit)
        .await
        .map(Json)
        .map_err(api_error)
}

pub async fn toggle_mode(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ModeQuery>,
) -> Result<String, ApiError> {
    let mode = state.manager.set_mode(&query.mode).map_err(|e| {
        ApiError::new(e, uri.path()).with_unexpected(UNEXPECTED_WHILE_SETTING_MODE)
    })?;
    Ok(format!("Mode successfully set to: {}", mode))
}

pub async fn current_mode(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "mode": state.manager.mode() }))
}

fn parse_grouping(query: &GroupQuery) -> nt_core::Result<(NonZeroU32, TimeUnit)> {
    let interval = match query.interval.as_deref() {
        None | Some("") => DEFAULT_INTERVAL,
        Some(raw) => raw.parse::<u32>().map_err(|_| {
            Error::InvalidInput(format!("Invalid interval '{}'. Use a positive integer.", raw))
        })?,
    };
    let interval = NonZeroU32::new(interval)
        .ok_or_else(|| Error::InvalidInput("Interval must be greater than zero.".to_string()))?;

    let unit = match query.unit.as_deref() {
        None | Some("") => DEFAULT_UNIT,
        Some(raw) => raw.parse::<TimeUnit>()?,
    };
    Ok((interval, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(interval: Option<&str>, unit: Option<&str>) -> GroupQuery {
        GroupQuery {
            keyword: "apple".to_string(),
            interval: interval.map(str::to_string),
            unit: unit.map(str::to_string),
        }
    }

    #[test]
    fn test_grouping_defaults() {
        let (interval, unit) = parse_grouping(&query(None, None)).unwrap();
        assert_eq!(interval.get(), 12);
        assert_eq!(unit, TimeUnit::Hours);
    }

    #[test]
    fn test_grouping_parses_values() {
        let (interval, unit) = parse_grouping(&query(Some("3"), Some("DAYS"))).unwrap();
        assert_eq!(interval.get(), 3);
        assert_eq!(unit, TimeUnit::Days);
    }

    #[test]
    fn test_grouping_rejects_bad_values() {
        let cases = [
            (Some("0"), None),
            (Some("-1"), None),
            (Some("ten"), None),
            (None, Some("fortnights")),
            (None, Some(" hours")),
        ];
        for (interval, unit) in cases {
            let parsed = parse_grouping(&query(interval, unit));
            assert!(matches!(parsed, Err(Error::InvalidInput(_))));
        }
    }
}
