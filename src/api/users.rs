use super::{fetch_json, FetchError, Fetcher};
use crate::models::User;

pub const USERS_PATH: &str = "/api/users";

pub async fn get_users(fetcher: &dyn Fetcher) -> Result<Vec<User>, FetchError> {
    fetch_json(fetcher, USERS_PATH).await
}
