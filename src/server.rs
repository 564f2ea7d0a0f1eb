//! HTTP surface
//!
//! Six independent routes: four stateless calculators and the two
//! silent-auction operations. All parameters arrive as query
//! parameters, on the POST routes too.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tracing::{debug, info};

use crate::{
    auction::{Amount, SharedBidStore},
    calc, config,
    error::RequestError,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreParams {
    pub obstacle_collisions: i64,
    pub packages_delivered: i64,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    #[serde(rename = "Score")]
    pub score: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillParams {
    pub red_count: i64,
    pub green_count: i64,
    pub blue_count: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpicinessParams {
    pub pepper_list: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBidParams {
    pub bidder_name: String,
    pub bid_amount: Amount,
}

pub async fn final_score(
    Query(params): Query<ScoreParams>,
) -> Result<Json<ScoreResponse>, RequestError> {
    let score = calc::final_score(params.obstacle_collisions, params.packages_delivered)?;
    Ok(Json(ScoreResponse { score }))
}

pub async fn calculate_bill(Query(params): Query<BillParams>) -> Json<i64> {
    Json(calc::sushi_bill(
        params.red_count,
        params.green_count,
        params.blue_count,
    ))
}

pub async fn chili_peppers(Query(params): Query<SpicinessParams>) -> Json<i64> {
    Json(calc::total_spiciness(&params.pepper_list))
}

pub async fn submit_bid(
    State(store): State<SharedBidStore>,
    Query(params): Query<SubmitBidParams>,
) -> String {
    let outcome = store.submit(&params.bidder_name, params.bid_amount);
    debug!(bidder = %params.bidder_name, ?outcome, "bid submitted");

    // the confirmation echoes what was sent, even when the bid was
    // a duplicate and the stored amount differs
    format!(
        "Bid submitted: {} - ${}",
        params.bidder_name, params.bid_amount
    )
}

pub async fn get_winner(State(store): State<SharedBidStore>) -> Result<String, RequestError> {
    store
        .winner()
        .ok_or_else(|| RequestError::NotFound("No bids have been placed.".to_owned()))
}

/// `textLines` repeats as a query key, which has no struct
/// representation in `serde_urlencoded`; read the raw pairs instead.
pub async fn compress_text(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<String>>, RequestError> {
    let lines: Vec<String> = pairs
        .into_iter()
        .filter(|(key, _)| key == "textLines")
        .map(|(_, value)| value)
        .collect();

    Ok(Json(calc::encode_lines(&lines)?))
}

pub fn router(store: SharedBidStore) -> Router {
    Router::new()
        .route("/Delivedroid", post(final_score))
        .route("/CalculateBill", get(calculate_bill))
        .route("/ChiliPeppers", get(chili_peppers))
        .route("/SubmitBid", post(submit_bid))
        .route("/GetWinner", get(get_winner))
        .route("/CompressText", get(compress_text))
        .with_state(store)
}

pub async fn run(store: SharedBidStore, shutdown: oneshot::Receiver<()>) -> Result<()> {
    let addr: SocketAddr = config::listen_addr()
        .parse()
        .with_context(|| format!("invalid listen address: {}", config::listen_addr()))?;

    info!(%addr, "listening");

    axum::Server::try_bind(&addr)?
        .serve(router(store).into_make_service())
        .with_graceful_shutdown(async {
            let _ = shutdown.await;
            info!("shutting down");
        })
        .await?;

    Ok(())
}
