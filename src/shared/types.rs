use serde::{Deserialize, Serialize};

/// Counters shown on the landing page, loaded once per server render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeCounts {
    #[serde(rename = "pollsCount")]
    pub polls_count: u64,
    #[serde(rename = "guessesCount")]
    pub guesses_count: u64,
    #[serde(rename = "usersCount")]
    pub users_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePoolRequest {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedPool {
    pub code: String, // invite code
}
