//! Guestbook routes — protocol translation between HTTP and the feed and
//! submission services.

use askama::Template;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{debug, error};

use crate::feed::{self, FEED_PAGE_SIZE, Message};
use crate::page::GuestbookPage;
use crate::state::AppState;
use crate::submission::{self, SubmissionError, SubmitForm};

const SUBMIT_FAILED_NOTICE: &str = "Your message could not be saved. Please try again.";

/// `GET /` — render the latest messages. A failed fetch renders no messages.
pub async fn index(State(state): State<AppState>) -> Response {
    let feed = match feed::fetch_feed(state.backend.as_ref(), FEED_PAGE_SIZE).await {
        Ok(feed) => Some(feed),
        Err(e) => {
            error!(error = %e, reason = ?e.reason(), "index: feed fetch failed");
            None
        }
    };

    render(StatusCode::OK, feed.as_deref(), None)
}

/// `POST /` — create a message from the form, then render the refreshed feed.
pub async fn submit(State(state): State<AppState>, Form(form): Form<SubmitForm>) -> Response {
    match submission::submit_message(state.backend.as_ref(), state.config.submit_policy, &form).await {
        Ok(feed) => render(StatusCode::OK, Some(feed.as_slice()), None),
        Err(SubmissionError::Rejected(e)) => {
            // Already reported at warn by the submission service.
            debug!(reason = ?e.reason(), "submit: rendering rejection notice");
            render(StatusCode::BAD_GATEWAY, None, Some(SUBMIT_FAILED_NOTICE))
        }
        Err(SubmissionError::Feed(e)) => {
            error!(error = %e, reason = ?e.reason(), "submit: feed refresh failed");
            render(StatusCode::OK, None, None)
        }
    }
}

fn render(status: StatusCode, feed: Option<&[Message]>, notice: Option<&str>) -> Response {
    match GuestbookPage::new(feed, notice).render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!(error = %e, "page render failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
#[path = "guestbook_test.rs"]
mod tests;
