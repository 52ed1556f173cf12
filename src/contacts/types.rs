use serde::{Deserialize, Serialize};

/// A single contact-book entry, owned by exactly one user.
///
/// The phone number is not globally unique (many users may know the same
/// number) but is unique within one owner's book.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: u64,
    pub owner_id: u64,
    pub name: String,
    pub phone_number: String,
}

/// Client-visible projection of a [`Contact`]. The owner is implied by the
/// authenticated caller and never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactView {
    pub id: u64,
    pub name: String,
    pub phone_number: String,
}

impl ContactView {
    pub fn of(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name.clone(),
            phone_number: contact.phone_number.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone_number: String,
}

/// Batch creation request.
///
/// With `atomic = false` (the default) each entry succeeds or fails on its
/// own and the response reports both sides. With `atomic = true` a single
/// failure aborts the batch and rolls back the entries created so far.
#[derive(Debug, Serialize, Deserialize)]
pub struct BulkContactRequest {
    pub contacts: Vec<ContactRequest>,
    #[serde(default)]
    pub atomic: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BulkContactResponse {
    pub created: Vec<ContactView>,
    pub failed: Vec<BulkFailure>,
}

/// One rejected entry of a bulk request, addressed by its position in the
/// submitted list.
#[derive(Debug, Serialize, Deserialize)]
pub struct BulkFailure {
    pub index: usize,
    pub error: String,
}
