use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use std::sync::Arc;

use super::types::{SpamReportRequest, SpamReportView};
use crate::auth::handlers::authenticate;
use crate::auth::tokens::TokenStore;
use crate::error::ApiError;
use crate::identity::types::validate_phone_number;
use crate::storage::memory::{SpamReportStore, UserStore};

pub async fn handle_list_reports(
    headers: HeaderMap,
    Extension(users): Extension<Arc<UserStore>>,
    Extension(reports): Extension<Arc<SpamReportStore>>,
    Extension(tokens): Extension<Arc<TokenStore>>,
) -> Result<(StatusCode, Json<Vec<SpamReportView>>), ApiError> {
    let user = authenticate(&headers, &tokens, &users)?;

    let entries = reports
        .list_for(user.id)
        .iter()
        .map(SpamReportView::of)
        .collect();

    Ok((StatusCode::OK, Json(entries)))
}

pub async fn handle_report_spam(
    headers: HeaderMap,
    Extension(users): Extension<Arc<UserStore>>,
    Extension(reports): Extension<Arc<SpamReportStore>>,
    Extension(tokens): Extension<Arc<TokenStore>>,
    Json(req): Json<SpamReportRequest>,
) -> Result<(StatusCode, Json<SpamReportView>), ApiError> {
    let user = authenticate(&headers, &tokens, &users)?;
    validate_phone_number("phone_number", &req.phone_number)?;

    let report = reports.insert(user.id, req.phone_number)?;
    tracing::debug!("User {} reported {}", user.id, report.phone_number);

    Ok((StatusCode::CREATED, Json(SpamReportView::of(&report))))
}
