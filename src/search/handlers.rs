use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

use super::resolver;
use super::types::SearchResult;
use crate::auth::handlers::authenticate;
use crate::auth::tokens::TokenStore;
use crate::error::ApiError;
use crate::identity::types::Requester;
use crate::storage::memory::{ContactStore, SpamReportStore, UserStore};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub async fn handle_search_by_name(
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
    Extension(users): Extension<Arc<UserStore>>,
    Extension(contacts): Extension<Arc<ContactStore>>,
    Extension(reports): Extension<Arc<SpamReportStore>>,
    Extension(tokens): Extension<Arc<TokenStore>>,
) -> Result<(StatusCode, Json<Vec<SearchResult>>), ApiError> {
    let user = authenticate(&headers, &tokens, &users)?;
    let requester = Requester::of(&user);

    let results = resolver::search_by_name(&params.q, &requester, &users, &contacts, &reports);
    tracing::debug!(
        "Name search {:?} by user {}: {} result(s)",
        params.q,
        requester.id,
        results.len()
    );

    Ok((StatusCode::OK, Json(results)))
}

pub async fn handle_search_by_phone(
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
    Extension(users): Extension<Arc<UserStore>>,
    Extension(contacts): Extension<Arc<ContactStore>>,
    Extension(reports): Extension<Arc<SpamReportStore>>,
    Extension(tokens): Extension<Arc<TokenStore>>,
) -> Result<(StatusCode, Json<Vec<SearchResult>>), ApiError> {
    let user = authenticate(&headers, &tokens, &users)?;
    let requester = Requester::of(&user);

    let results = resolver::search_by_phone(&params.q, &requester, &users, &contacts, &reports);
    tracing::debug!(
        "Phone search {:?} by user {}: {} result(s)",
        params.q,
        requester.id,
        results.len()
    );

    Ok((StatusCode::OK, Json(results)))
}
