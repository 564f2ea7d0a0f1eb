use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

pub type BidderName = String;
pub type BidderNameRef<'s> = &'s str;
pub type Amount = i64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bid {
    pub bidder: BidderName,
    pub amount: Amount,
}

/// What `submit` did with the bid.
///
/// Only visible internally (logging, tests); the HTTP confirmation
/// is the same either way.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Recorded,
    AlreadyBid,
}

/// A store for all bids placed in the silent auction
pub trait BidStore {
    /// Record a bid, unless the bidder already placed one.
    ///
    /// A bidder's first bid is final; anything they submit later is
    /// ignored without an error.
    fn submit(&self, bidder: BidderNameRef, amount: Amount) -> SubmitOutcome;

    /// The bidder holding the highest bid, if any bids were placed.
    ///
    /// Among equal maxima the first-inserted bidder wins.
    fn winner(&self) -> Option<BidderName>;
}

pub type SharedBidStore = Arc<dyn BidStore + Send + Sync>;

/// Bids in submission order, unique by bidder name.
///
/// A `Vec` rather than a map: winner tie-breaking depends on
/// insertion order, which unordered maps don't keep.
pub struct InMemoryBidStore(Mutex<Vec<Bid>>);

impl InMemoryBidStore {
    pub fn new() -> Self {
        Self(Mutex::new(Vec::new()))
    }

    pub fn new_shared() -> SharedBidStore {
        Arc::new(Self::new())
    }
}

impl BidStore for InMemoryBidStore {
    fn submit(&self, bidder: BidderNameRef, amount: Amount) -> SubmitOutcome {
        // check-then-insert must stay a single critical section,
        // or racing duplicates could both get recorded
        let mut bids = self.0.lock();

        if bids.iter().any(|bid| bid.bidder == bidder) {
            debug!(?bidder, "duplicate bid ignored");
            return SubmitOutcome::AlreadyBid;
        }

        bids.push(Bid {
            bidder: bidder.to_owned(),
            amount,
        });
        debug!(?bidder, ?amount, "bid recorded");
        SubmitOutcome::Recorded
    }

    fn winner(&self) -> Option<BidderName> {
        let bids = self.0.lock();

        let mut best: Option<&Bid> = None;
        for bid in bids.iter() {
            // strictly-greater, so the first-inserted of equal maxima stays
            if best.map(|b| bid.amount > b.amount).unwrap_or(true) {
                best = Some(bid);
            }
        }
        best.map(|bid| bid.bidder.clone())
    }
}
