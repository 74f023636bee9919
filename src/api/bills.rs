use urlencoding::encode;

use super::{fetch_json, FetchError, Fetcher};
use crate::models::{Bill, BillAttachment, PowerHour, StateBillSearchResult};

pub const BILLS_PATH: &str = "/api/bills";
pub const STATE_BILL_SEARCH_PATH: &str = "/api/state-bills/search";

/// `bill_id` is encoded as a single path segment.
pub fn bill_path(bill_id: &str) -> String {
    format!("{}/{}", BILLS_PATH, encode(bill_id))
}

pub fn power_hours_path(bill_id: &str) -> String {
    format!("{}/power-hours", bill_path(bill_id))
}

pub fn attachments_path(bill_id: &str) -> String {
    format!("{}/attachments", bill_path(bill_id))
}

/// Search by code name (e.g. `S568`), optionally within one session.
pub fn state_bill_search_path(code_name: &str, session_year: Option<i32>) -> String {
    let mut path = format!("{}?codeName={}", STATE_BILL_SEARCH_PATH, encode(code_name));
    if let Some(year) = session_year {
        path.push_str(&format!("&sessionYear={}", year));
    }
    path
}

/// Tracked bills, ordered by name on the backend.
pub async fn get_bills(fetcher: &dyn Fetcher) -> Result<Vec<Bill>, FetchError> {
    fetch_json(fetcher, BILLS_PATH).await
}

pub async fn get_bill(fetcher: &dyn Fetcher, bill_id: &str) -> Result<Bill, FetchError> {
    fetch_json(fetcher, &bill_path(bill_id)).await
}

/// Power hours for a bill, oldest first.
pub async fn get_power_hours(
    fetcher: &dyn Fetcher,
    bill_id: &str,
) -> Result<Vec<PowerHour>, FetchError> {
    fetch_json(fetcher, &power_hours_path(bill_id)).await
}

pub async fn get_attachments(
    fetcher: &dyn Fetcher,
    bill_id: &str,
) -> Result<Vec<BillAttachment>, FetchError> {
    fetch_json(fetcher, &attachments_path(bill_id)).await
}

/// State legislature matches, each flagged with whether it is already tracked.
pub async fn search_state_bills(
    fetcher: &dyn Fetcher,
    code_name: &str,
    session_year: Option<i32>,
) -> Result<Vec<StateBillSearchResult>, FetchError> {
    fetch_json(fetcher, &state_bill_search_path(code_name, session_year)).await
}
