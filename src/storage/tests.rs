//! Storage Module Tests
//!
//! Validates the uniqueness invariants, the lookup methods consumed by the
//! search resolver, and the deterministic ordering of store reads.

#[cfg(test)]
mod tests {
    use crate::error::ApiError;
    use crate::identity::types::NewUser;
    use crate::storage::memory::{ContactStore, SpamReportStore, UserStore};
    use std::collections::HashSet;

    fn new_user(first: &str, last: &str, phone: &str) -> NewUser {
        NewUser {
            first_name: first.to_string(),
            last_name: last.to_string(),
            phone_number: phone.to_string(),
            email: None,
            password_hash: "hash".to_string(),
        }
    }

    // ============================================================
    // USER STORE
    // ============================================================

    #[test]
    fn test_user_insert_assigns_sequential_ids() {
        let users = UserStore::new();

        let a = users.insert(new_user("Anna", "Lee", "+15550000001")).unwrap();
        let b = users.insert(new_user("Bob", "Stone", "+15550000002")).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(users.count(), 2);
    }

    #[test]
    fn test_user_duplicate_phone_rejected() {
        let users = UserStore::new();
        users.insert(new_user("Anna", "Lee", "+15550000001")).unwrap();

        let err = users
            .insert(new_user("Impostor", "Lee", "+15550000001"))
            .unwrap_err();

        match err {
            ApiError::UniqueViolation(field) => assert_eq!(field, "phone_number"),
            other => panic!("expected unique violation, got {:?}", other),
        }

        // The failed insert must leave the store untouched.
        assert_eq!(users.count(), 1);
        assert_eq!(users.find_by_phone("+15550000001").unwrap().first_name, "Anna");
    }

    #[test]
    fn test_user_find_by_phone() {
        let users = UserStore::new();
        users.insert(new_user("Anna", "Lee", "+15550000001")).unwrap();

        assert!(users.find_by_phone("+15550000001").is_some());
        assert!(users.find_by_phone("+19990000000").is_none());
        assert!(users.exists_by_phone("+15550000001"));
        assert!(!users.exists_by_phone("+19990000000"));
    }

    #[test]
    fn test_user_full_name_search_is_case_insensitive() {
        let users = UserStore::new();
        users.insert(new_user("Anna", "Lee", "+15550000001")).unwrap();
        users.insert(new_user("Diana", "Ross", "+15550000002")).unwrap();

        // The store contract takes an already-lowercased needle.
        let hits = users.find_by_full_name_contains("an");
        assert_eq!(hits.len(), 2);

        let hits = users.find_by_full_name_contains("anna lee");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Anna");

        // Matching spans the space between first and last name.
        let hits = users.find_by_full_name_contains("a l");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_user_phone_numbers_set() {
        let users = UserStore::new();
        users.insert(new_user("Anna", "Lee", "+15550000001")).unwrap();
        users.insert(new_user("Bob", "Stone", "+15550000002")).unwrap();

        let phones = users.phone_numbers();
        assert_eq!(phones.len(), 2);
        assert!(phones.contains("+15550000001"));
        assert!(phones.contains("+15550000002"));
    }

    // ============================================================
    // CONTACT STORE
    // ============================================================

    #[test]
    fn test_contact_unique_per_owner_only() {
        let contacts = ContactStore::new();

        contacts
            .insert(1, "Office".to_string(), "+15551234567".to_string())
            .unwrap();

        // Same owner, same number: rejected.
        let err = contacts
            .insert(1, "Office again".to_string(), "+15551234567".to_string())
            .unwrap_err();
        assert!(matches!(err, ApiError::UniqueViolation(_)));

        // Different owner, same number: allowed.
        contacts
            .insert(2, "Work".to_string(), "+15551234567".to_string())
            .unwrap();

        assert_eq!(contacts.count(), 2);
    }

    #[test]
    fn test_contact_list_for_owner() {
        let contacts = ContactStore::new();
        contacts.insert(1, "A".to_string(), "+15550000001".to_string()).unwrap();
        contacts.insert(2, "B".to_string(), "+15550000002".to_string()).unwrap();
        contacts.insert(1, "C".to_string(), "+15550000003".to_string()).unwrap();

        let mine = contacts.list_for(1);
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|c| c.owner_id == 1));
        assert!(mine[0].id < mine[1].id);
    }

    #[test]
    fn test_contact_name_search_excludes_registered_numbers() {
        let contacts = ContactStore::new();
        contacts
            .insert(1, "Spammer".to_string(), "+15551234567".to_string())
            .unwrap();
        contacts
            .insert(1, "Spam Risk".to_string(), "+15559999999".to_string())
            .unwrap();

        let mut excluding = HashSet::new();
        excluding.insert("+15551234567".to_string());

        let hits = contacts.find_by_name_contains("spam", &excluding);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].phone_number, "+15559999999");
    }

    #[test]
    fn test_contact_find_by_phone_id_ascending() {
        let contacts = ContactStore::new();
        let first = contacts
            .insert(3, "Pizza".to_string(), "+15551230000".to_string())
            .unwrap();
        contacts
            .insert(4, "Unrelated".to_string(), "+15550000009".to_string())
            .unwrap();
        let second = contacts
            .insert(5, "Pizza Place".to_string(), "+15551230000".to_string())
            .unwrap();

        let hits = contacts.find_by_phone("+15551230000");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, first.id);
        assert_eq!(hits[1].id, second.id);
    }

    #[test]
    fn test_contact_mutual_check() {
        let contacts = ContactStore::new();
        contacts
            .insert(1, "Friend".to_string(), "+15550000002".to_string())
            .unwrap();

        assert!(contacts.exists_for(1, "+15550000002"));
        assert!(!contacts.exists_for(2, "+15550000002"));
        assert!(!contacts.exists_for(1, "+15550000003"));
    }

    #[test]
    fn test_contact_delete_is_owner_scoped() {
        let contacts = ContactStore::new();
        let contact = contacts
            .insert(1, "Friend".to_string(), "+15550000002".to_string())
            .unwrap();

        // Someone else cannot delete it.
        assert!(matches!(
            contacts.delete(2, contact.id),
            Err(ApiError::NotFound)
        ));
        assert_eq!(contacts.count(), 1);

        contacts.delete(1, contact.id).unwrap();
        assert_eq!(contacts.count(), 0);

        // The (owner, phone) slot is free again after deletion.
        contacts
            .insert(1, "Friend".to_string(), "+15550000002".to_string())
            .unwrap();
    }

    // ============================================================
    // SPAM REPORT STORE
    // ============================================================

    #[test]
    fn test_report_double_report_rejected() {
        let reports = SpamReportStore::new();
        reports.insert(1, "+15551234567".to_string()).unwrap();

        let err = reports.insert(1, "+15551234567".to_string()).unwrap_err();
        assert!(matches!(err, ApiError::UniqueViolation(_)));

        // A different reporter may still report the same number.
        reports.insert(2, "+15551234567".to_string()).unwrap();
        assert_eq!(reports.count_by_phone("+15551234567"), 2);
    }

    #[test]
    fn test_report_counts_grouped_by_phone() {
        let reports = SpamReportStore::new();
        reports.insert(1, "+15551234567".to_string()).unwrap();
        reports.insert(2, "+15551234567".to_string()).unwrap();
        reports.insert(1, "+15559999999".to_string()).unwrap();

        let counts = reports.counts_grouped_by_phone();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("+15551234567"), Some(&2));
        assert_eq!(counts.get("+15559999999"), Some(&1));
        assert_eq!(counts.get("+10000000000"), None);
    }

    #[test]
    fn test_report_list_for_reporter() {
        let reports = SpamReportStore::new();
        reports.insert(1, "+15551234567".to_string()).unwrap();
        reports.insert(2, "+15558888888".to_string()).unwrap();
        reports.insert(1, "+15559999999".to_string()).unwrap();

        let mine = reports.list_for(1);
        assert_eq!(mine.len(), 2);
        assert!(mine[0].id < mine[1].id);
    }
}
