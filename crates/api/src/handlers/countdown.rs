//! Handlers for the public `/countdown` resource.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use futures::{future, Stream, StreamExt};
use tokio_stream::wrappers::IntervalStream;
use wedsite_core::countdown::{time_remaining, CountdownSnapshot, TICK_INTERVAL_MS};

use crate::response::DataResponse;
use crate::state::AppState;

/// SSE event name for countdown ticks.
pub const TICK_EVENT: &str = "tick";

/// GET /api/v1/countdown
pub async fn get_countdown(State(state): State<AppState>) -> Json<DataResponse<CountdownSnapshot>> {
    let snapshot = CountdownSnapshot::at(state.config.event_target, state.clock.now());
    Json(DataResponse { data: snapshot })
}

/// GET /api/v1/countdown/stream
///
/// Emits the remaining time once per second. The stream ends right after
/// the first all-zero value.
pub async fn stream_countdown(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let target = state.config.event_target;
    let clock = state.clock.clone();
    let interval = tokio::time::interval(Duration::from_millis(TICK_INTERVAL_MS));

    tracing::debug!(%target, "Countdown stream opened");

    let stream = IntervalStream::new(interval)
        .map(move |_| time_remaining(target, clock.now()))
        .scan(false, |finished, remaining| {
            if *finished {
                return future::ready(None);
            }
            *finished = remaining.is_zero();
            future::ready(Some(remaining))
        })
        .map(|remaining| {
            let event = Event::default()
                .event(TICK_EVENT)
                .json_data(remaining)
                .unwrap_or_else(|_| Event::default().event(TICK_EVENT).data("serialization_error"));
            Ok(event)
        });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15)))
}
