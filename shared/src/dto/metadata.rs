use serde::{Deserialize, Serialize};

/// Collection name prefix used for every token record.
pub const TOKEN_NAME_PREFIX: &str = "NFT Neighbor #";

/// Fixed description shared by every token in the collection.
pub const COLLECTION_DESCRIPTION: &str =
    "NFT Neighbors is a DAO focused on bringing bluechip projects to the people.";

/// Descriptive record for one token, in the shape `tokenURI` consumers expect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl TokenMetadata {
    /// Build the record for `token_id`.
    ///
    /// The identifier is not validated: whatever path segment the caller sent is
    /// echoed into both the name and the image URL.
    pub fn for_token(token_id: &str, image_base: &str) -> Self {
        Self {
            name: format!("{TOKEN_NAME_PREFIX}{token_id}"),
            description: COLLECTION_DESCRIPTION.to_string(),
            image: format!("{image_base}{token_id}.png"),
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
