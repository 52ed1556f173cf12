use serde::{Deserialize, Serialize};

/// One row of a search response.
///
/// Registered users carry their directory id and, when the mutual-contact
/// rule allows it, an email. Contact-derived results have `id: null` and
/// never an email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: Option<u64>,
    pub name: String,
    pub phone_number: String,
    pub spam_likelihood: f64,
    pub email: Option<String>,
}
