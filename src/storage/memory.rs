use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::contacts::types::Contact;
use crate::error::ApiError;
use crate::identity::types::{NewUser, User};
use crate::spam::types::SpamReport;

/// Registered-user directory.
///
/// `phone_index` is the uniqueness guard: an insert claims the phone number
/// through the index entry before the user row is written, so two concurrent
/// registrations of the same number cannot both succeed.
pub struct UserStore {
    users: DashMap<u64, User>,
    phone_index: DashMap<String, u64>,
    next_id: AtomicU64,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            phone_index: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn insert(&self, new_user: NewUser) -> Result<User, ApiError> {
        match self.phone_index.entry(new_user.phone_number.clone()) {
            Entry::Occupied(_) => Err(ApiError::UniqueViolation("phone_number")),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let user = User {
                    id,
                    first_name: new_user.first_name,
                    last_name: new_user.last_name,
                    phone_number: new_user.phone_number,
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                    registered_at: Utc::now(),
                };

                slot.insert(id);
                self.users.insert(id, user.clone());
                Ok(user)
            }
        }
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }

    pub fn get(&self, id: u64) -> Option<User> {
        self.users.get(&id).map(|entry| entry.value().clone())
    }

    pub fn exists_by_phone(&self, phone_number: &str) -> bool {
        self.phone_index.contains_key(phone_number)
    }

    /// Exact-phone lookup.
    ///
    /// Uniqueness makes at most one row possible, but the scan still resolves
    /// to the lowest id so the result stays deterministic even if the
    /// invariant were ever violated by hand-loaded data.
    pub fn find_by_phone(&self, phone_number: &str) -> Option<User> {
        self.users
            .iter()
            .filter(|entry| entry.value().phone_number == phone_number)
            .min_by_key(|entry| entry.value().id)
            .map(|entry| entry.value().clone())
    }

    /// Case-insensitive substring match over `"{first} {last}"`. The needle
    /// must already be lowercased by the caller.
    pub fn find_by_full_name_contains(&self, needle: &str) -> Vec<User> {
        self.users
            .iter()
            .filter(|entry| entry.value().full_name().to_lowercase().contains(needle))
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Every registered phone number, used by the resolver to suppress
    /// contact-derived duplicates of registered users.
    pub fn phone_numbers(&self) -> HashSet<String> {
        self.phone_index
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Contact books for all users, indexed by (owner, phone) for the uniqueness
/// constraint and the mutual-contact check.
pub struct ContactStore {
    contacts: DashMap<u64, Contact>,
    owner_phone_index: DashMap<(u64, String), u64>,
    next_id: AtomicU64,
}

impl ContactStore {
    pub fn new() -> Self {
        Self {
            contacts: DashMap::new(),
            owner_phone_index: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn insert(
        &self,
        owner_id: u64,
        name: String,
        phone_number: String,
    ) -> Result<Contact, ApiError> {
        match self
            .owner_phone_index
            .entry((owner_id, phone_number.clone()))
        {
            Entry::Occupied(_) => Err(ApiError::UniqueViolation("phone_number")),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let contact = Contact {
                    id,
                    owner_id,
                    name,
                    phone_number,
                };

                slot.insert(id);
                self.contacts.insert(id, contact.clone());
                Ok(contact)
            }
        }
    }

    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    pub fn list_for(&self, owner_id: u64) -> Vec<Contact> {
        let mut entries: Vec<Contact> = self
            .contacts
            .iter()
            .filter(|entry| entry.value().owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect();

        entries.sort_by_key(|contact| contact.id);
        entries
    }

    /// Case-insensitive substring match over the contact name, excluding any
    /// entry whose phone number appears in `excluding` (the registered set).
    /// The needle must already be lowercased by the caller.
    pub fn find_by_name_contains(&self, needle: &str, excluding: &HashSet<String>) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|entry| {
                let contact = entry.value();
                contact.name.to_lowercase().contains(needle)
                    && !excluding.contains(&contact.phone_number)
            })
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Every contact entry for an exact phone number, id ascending.
    pub fn find_by_phone(&self, phone_number: &str) -> Vec<Contact> {
        let mut entries: Vec<Contact> = self
            .contacts
            .iter()
            .filter(|entry| entry.value().phone_number == phone_number)
            .map(|entry| entry.value().clone())
            .collect();

        entries.sort_by_key(|contact| contact.id);
        entries
    }

    /// The mutual-contact check: does `owner_id` have `phone_number` saved in
    /// their own book?
    pub fn exists_for(&self, owner_id: u64, phone_number: &str) -> bool {
        self.owner_phone_index
            .contains_key(&(owner_id, phone_number.to_string()))
    }

    /// Owner-scoped removal. Deleting a contact that does not exist or that
    /// belongs to someone else reports `NotFound` either way.
    pub fn delete(&self, owner_id: u64, contact_id: u64) -> Result<(), ApiError> {
        match self
            .contacts
            .remove_if(&contact_id, |_, contact| contact.owner_id == owner_id)
        {
            Some((_, contact)) => {
                self.owner_phone_index
                    .remove(&(owner_id, contact.phone_number));
                Ok(())
            }
            None => Err(ApiError::NotFound),
        }
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Spam reports, indexed by (reporter, phone) to reject double reporting.
pub struct SpamReportStore {
    reports: DashMap<u64, SpamReport>,
    reporter_phone_index: DashMap<(u64, String), u64>,
    next_id: AtomicU64,
}

impl SpamReportStore {
    pub fn new() -> Self {
        Self {
            reports: DashMap::new(),
            reporter_phone_index: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn insert(&self, reporter_id: u64, phone_number: String) -> Result<SpamReport, ApiError> {
        match self
            .reporter_phone_index
            .entry((reporter_id, phone_number.clone()))
        {
            Entry::Occupied(_) => Err(ApiError::UniqueViolation("phone_number")),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let report = SpamReport {
                    id,
                    reporter_id,
                    phone_number,
                    reported_at: Utc::now(),
                };

                slot.insert(id);
                self.reports.insert(id, report.clone());
                Ok(report)
            }
        }
    }

    pub fn count(&self) -> usize {
        self.reports.len()
    }

    pub fn list_for(&self, reporter_id: u64) -> Vec<SpamReport> {
        let mut entries: Vec<SpamReport> = self
            .reports
            .iter()
            .filter(|entry| entry.value().reporter_id == reporter_id)
            .map(|entry| entry.value().clone())
            .collect();

        entries.sort_by_key(|report| report.id);
        entries
    }

    pub fn count_by_phone(&self, phone_number: &str) -> usize {
        self.reports
            .iter()
            .filter(|entry| entry.value().phone_number == phone_number)
            .count()
    }

    /// Report counts for every distinct reported number, computed in one
    /// pass. Numbers with no reports are absent from the map.
    pub fn counts_grouped_by_phone(&self) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for entry in self.reports.iter() {
            *counts
                .entry(entry.value().phone_number.clone())
                .or_insert(0) += 1;
        }
        counts
    }
}

impl Default for SpamReportStore {
    fn default() -> Self {
        Self::new()
    }
}
