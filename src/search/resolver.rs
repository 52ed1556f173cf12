use std::collections::HashMap;

use super::types::SearchResult;
use crate::identity::types::{Requester, User};
use crate::spam::score;
use crate::storage::memory::{ContactStore, SpamReportStore, UserStore};

/// Name-path search.
///
/// Registered users whose full name matches come first, then contact entries
/// whose name matches, each set ordered prefix-matches-first. Contact entries
/// pointing at a registered number are suppressed entirely; the registered
/// record takes precedence.
pub fn search_by_name(
    query: &str,
    requester: &Requester,
    users: &UserStore,
    contacts: &ContactStore,
    reports: &SpamReportStore,
) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    // One phone → score table per search; scoring per row would re-count the
    // report store once per candidate.
    let scores = score::score_table(reports, users);

    let mut registered = users.find_by_full_name_contains(&needle);
    registered.sort_by_cached_key(|user| {
        let full_name = user.full_name();
        (prefix_rank(&full_name, &needle), full_name, user.id)
    });

    let mut results: Vec<SearchResult> = registered
        .iter()
        .map(|user| SearchResult {
            id: Some(user.id),
            name: user.full_name(),
            phone_number: user.phone_number.clone(),
            spam_likelihood: table_score(&scores, &user.phone_number),
            email: disclosed_email(user, requester, contacts),
        })
        .collect();

    let registered_phones = users.phone_numbers();
    let mut matches = contacts.find_by_name_contains(&needle, &registered_phones);
    matches.sort_by_cached_key(|contact| {
        (
            prefix_rank(&contact.name, &needle),
            contact.name.clone(),
            contact.id,
        )
    });

    results.extend(matches.into_iter().map(|contact| {
        let spam_likelihood = table_score(&scores, &contact.phone_number);
        SearchResult {
            id: None,
            name: contact.name,
            phone_number: contact.phone_number,
            spam_likelihood,
            email: None,
        }
    }));

    results
}

/// Phone-path search: exact match only.
///
/// A registered user with the queried number short-circuits the contact scan
/// and yields a single result. Otherwise every contact entry naming that
/// number is returned, id ascending, all carrying the same score.
pub fn search_by_phone(
    query: &str,
    requester: &Requester,
    users: &UserStore,
    contacts: &ContactStore,
    reports: &SpamReportStore,
) -> Vec<SearchResult> {
    let phone_number = query.trim();
    if phone_number.is_empty() {
        return Vec::new();
    }

    let spam_likelihood = score::score_for(phone_number, reports, users);

    if let Some(user) = users.find_by_phone(phone_number) {
        return vec![SearchResult {
            id: Some(user.id),
            name: user.full_name(),
            phone_number: user.phone_number.clone(),
            spam_likelihood,
            email: disclosed_email(&user, requester, contacts),
        }];
    }

    contacts
        .find_by_phone(phone_number)
        .into_iter()
        .map(|contact| SearchResult {
            id: None,
            name: contact.name,
            phone_number: contact.phone_number,
            spam_likelihood,
            email: None,
        })
        .collect()
}

/// Prefix matches sort ahead of mere substring matches. Ties are broken by
/// the raw name, then by id, so the ordering is total no matter how the
/// store iterated.
fn prefix_rank(name: &str, needle: &str) -> u8 {
    if name.to_lowercase().starts_with(needle) {
        0
    } else {
        1
    }
}

/// Numbers absent from the table have no reports and score `0.0`.
fn table_score(scores: &HashMap<String, f64>, phone_number: &str) -> f64 {
    scores.get(phone_number).copied().unwrap_or(0.0)
}

/// The target's email is visible only when the target has the requester's
/// number saved in their own contact book. The requester knowing the target
/// discloses nothing.
fn disclosed_email(
    target: &User,
    requester: &Requester,
    contacts: &ContactStore,
) -> Option<String> {
    if contacts.exists_for(target.id, &requester.phone_number) {
        target.email.clone()
    } else {
        None
    }
}
