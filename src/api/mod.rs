mod error;
mod handler;
mod router;

pub use error::{ApiErrorCode, recover_error};
pub use router::{MAX_BODY_BYTES, routes};

use crate::server::Server;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

/// Everything served under `/api`, with rejections turned into responses.
pub fn api(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
    warp::path("api").and(routes(server)).recover(recover_error)
}
