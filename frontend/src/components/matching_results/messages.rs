use common::error::ApiError;
use common::model::matching::MatchResult;

pub enum Msg {
    /// The store step of sequence `ticket` is over; analysis is being requested.
    Analyzing(u64),
    Finished {
        ticket: u64,
        result: Result<MatchResult, ApiError>,
    },
}
