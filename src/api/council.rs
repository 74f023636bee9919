use super::{fetch_json, FetchError, Fetcher};
use crate::models::CouncilMemberRow;

pub const COUNCIL_MEMBERS_PATH: &str = "/council-members";

/// Rows come back in backend order.
pub async fn get_council_members(
    fetcher: &dyn Fetcher,
) -> Result<Vec<CouncilMemberRow>, FetchError> {
    fetch_json(fetcher, COUNCIL_MEMBERS_PATH).await
}
