use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use futures::executor::block_on;

use crate::{
    auction::{BidStore, InMemoryBidStore},
    error::RequestError,
    server::{self, ScoreParams, SubmitBidParams},
};

#[test]
fn submit_bid_echoes_the_submitted_amount() {
    let store = InMemoryBidStore::new_shared();

    let confirmation = block_on(server::submit_bid(
        State(store.clone()),
        Query(SubmitBidParams {
            bidder_name: "fenil".to_owned(),
            bid_amount: 50,
        }),
    ));
    assert_eq!(confirmation, "Bid submitted: fenil - $50");

    // a duplicate still echoes what was sent, not what is stored
    let confirmation = block_on(server::submit_bid(
        State(store.clone()),
        Query(SubmitBidParams {
            bidder_name: "fenil".to_owned(),
            bid_amount: 900,
        }),
    ));
    assert_eq!(confirmation, "Bid submitted: fenil - $900");

    assert_eq!(store.winner(), Some("fenil".to_owned()));
}

#[test]
fn get_winner_reports_not_found_on_an_empty_store() {
    let store = InMemoryBidStore::new_shared();

    let res = block_on(server::get_winner(State(store)));

    assert!(matches!(res, Err(RequestError::NotFound(_))));
}

#[test]
fn get_winner_returns_the_highest_bidder() {
    let store = InMemoryBidStore::new_shared();
    store.submit("alice", 50);
    store.submit("bob", 100);

    let winner = block_on(server::get_winner(State(store))).unwrap();

    assert_eq!(winner, "bob");
}

#[test]
fn final_score_handler_wraps_the_score() {
    let res = block_on(server::final_score(Query(ScoreParams {
        obstacle_collisions: 3,
        packages_delivered: 2,
    })))
    .unwrap();

    assert_eq!(res.0.score, 70);
}

#[test]
fn final_score_handler_rejects_negative_inputs() {
    let res = block_on(server::final_score(Query(ScoreParams {
        obstacle_collisions: -1,
        packages_delivered: 0,
    })));

    assert!(matches!(res, Err(RequestError::Validation(_))));
}

#[test]
fn compress_text_reads_repeated_query_keys() {
    let res = block_on(server::compress_text(Query(vec![
        ("textLines".to_owned(), "aab".to_owned()),
        ("other".to_owned(), "zz".to_owned()),
        ("textLines".to_owned(), "c".to_owned()),
    ])))
    .unwrap();

    assert_eq!(res.0, vec!["2 a 1 b", "1 c"]);
}

#[test]
fn compress_text_without_lines_is_rejected() {
    let res = block_on(server::compress_text(Query(Vec::new())));

    assert!(matches!(res, Err(RequestError::Validation(_))));
}

#[test]
fn request_errors_map_to_http_statuses() {
    let resp = RequestError::Validation("bad".to_owned()).into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = RequestError::NotFound("missing".to_owned()).into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
