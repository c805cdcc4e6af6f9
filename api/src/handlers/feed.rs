//! Feed handlers
//!
//! `GET /feed` returns the assembled feed as JSON. The `timeframe` query
//! parameter selects the view; leaving it out (or empty) requests the
//! default view, the only one in which a pinned post is featured.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::domain::entities::{FeedResult, TimeFrame};
use crate::error::AppError;
use crate::AppState;

const MAX_TIME_FRAME_LEN: usize = 32;

/// Query parameters for GET /feed
#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    pub timeframe: Option<String>,
}

fn parse_time_frame(value: Option<String>) -> Result<TimeFrame, AppError> {
    if let Some(ref value) = value {
        let valid = value.len() <= MAX_TIME_FRAME_LEN
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::BadRequest(format!(
                "Invalid timeframe: {:?}",
                value
            )));
        }
    }
    Ok(TimeFrame::from(value))
}

/// GET /feed
pub async fn get_feed(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> Result<Json<FeedResult>, AppError> {
    let time_frame = parse_time_frame(params.timeframe)?;
    let feed = state.feed_service.generate_feed(&time_frame).await?;
    Ok(Json(feed))
}
