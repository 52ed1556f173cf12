use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use std::sync::Arc;

use super::types::{
    BulkContactRequest, BulkContactResponse, BulkFailure, ContactRequest, ContactView,
};
use crate::auth::handlers::authenticate;
use crate::auth::tokens::TokenStore;
use crate::error::ApiError;
use crate::identity::types::{validate_non_empty, validate_phone_number};
use crate::storage::memory::{ContactStore, UserStore};

fn validate_contact(req: &ContactRequest) -> Result<(), ApiError> {
    validate_non_empty("name", &req.name)?;
    validate_phone_number("phone_number", &req.phone_number)
}

pub async fn handle_list_contacts(
    headers: HeaderMap,
    Extension(users): Extension<Arc<UserStore>>,
    Extension(contacts): Extension<Arc<ContactStore>>,
    Extension(tokens): Extension<Arc<TokenStore>>,
) -> Result<(StatusCode, Json<Vec<ContactView>>), ApiError> {
    let user = authenticate(&headers, &tokens, &users)?;

    let entries = contacts
        .list_for(user.id)
        .iter()
        .map(ContactView::of)
        .collect();

    Ok((StatusCode::OK, Json(entries)))
}

pub async fn handle_create_contact(
    headers: HeaderMap,
    Extension(users): Extension<Arc<UserStore>>,
    Extension(contacts): Extension<Arc<ContactStore>>,
    Extension(tokens): Extension<Arc<TokenStore>>,
    Json(req): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactView>), ApiError> {
    let user = authenticate(&headers, &tokens, &users)?;
    validate_contact(&req)?;

    let contact = contacts.insert(user.id, req.name, req.phone_number)?;
    tracing::debug!("User {} created contact {}", user.id, contact.id);

    Ok((StatusCode::CREATED, Json(ContactView::of(&contact))))
}

/// Batch creation. Each insertion is individually atomic; the `atomic` flag
/// decides what a mid-batch failure means for the rest of the request.
pub async fn handle_bulk_create_contacts(
    headers: HeaderMap,
    Extension(users): Extension<Arc<UserStore>>,
    Extension(contacts): Extension<Arc<ContactStore>>,
    Extension(tokens): Extension<Arc<TokenStore>>,
    Json(req): Json<BulkContactRequest>,
) -> Result<(StatusCode, Json<BulkContactResponse>), ApiError> {
    let user = authenticate(&headers, &tokens, &users)?;

    let mut created = Vec::new();
    let mut failed = Vec::new();
    let mut first_failure_status = None;

    for (index, entry) in req.contacts.iter().enumerate() {
        let outcome = validate_contact(entry).and_then(|_| {
            contacts.insert(user.id, entry.name.clone(), entry.phone_number.clone())
        });

        match outcome {
            Ok(contact) => created.push(contact),
            Err(err) => {
                first_failure_status.get_or_insert(err.status());
                failed.push(BulkFailure {
                    index,
                    error: err.to_string(),
                });
                if req.atomic {
                    break;
                }
            }
        }
    }

    if req.atomic && !failed.is_empty() {
        // Roll back this request's inserts so the batch has no effect.
        for contact in &created {
            if let Err(err) = contacts.delete(user.id, contact.id) {
                tracing::error!(
                    "Failed to roll back contact {} for user {}: {}",
                    contact.id,
                    user.id,
                    err
                );
            }
        }

        tracing::debug!(
            "Atomic bulk create for user {} aborted at entry {}",
            user.id,
            failed[0].index
        );

        return Ok((
            first_failure_status.unwrap_or(StatusCode::UNPROCESSABLE_ENTITY),
            Json(BulkContactResponse {
                created: Vec::new(),
                failed,
            }),
        ));
    }

    let status = if failed.is_empty() {
        StatusCode::CREATED
    } else {
        StatusCode::MULTI_STATUS
    };

    tracing::debug!(
        "Bulk create for user {}: {} created, {} failed",
        user.id,
        created.len(),
        failed.len()
    );

    Ok((
        status,
        Json(BulkContactResponse {
            created: created.iter().map(ContactView::of).collect(),
            failed,
        }),
    ))
}

pub async fn handle_delete_contact(
    headers: HeaderMap,
    Path(contact_id): Path<u64>,
    Extension(users): Extension<Arc<UserStore>>,
    Extension(contacts): Extension<Arc<ContactStore>>,
    Extension(tokens): Extension<Arc<TokenStore>>,
) -> Result<StatusCode, ApiError> {
    let user = authenticate(&headers, &tokens, &users)?;

    contacts.delete(user.id, contact_id)?;
    tracing::debug!("User {} deleted contact {}", user.id, contact_id);

    Ok(StatusCode::NO_CONTENT)
}
