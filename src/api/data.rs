//! Mock datasets module
//!
//! The fixed, process-lifetime sample records served by the mock API.
//! These are literals by design; there is no storage behind them.

use serde::Serialize;
use std::sync::OnceLock;

/// Number of contacts per page
pub const CONTACTS_PAGE_SIZE: usize = 5;

/// A sample project record
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub client: &'static str,
    pub id: u32,
    pub title: &'static str,
    pub due_date: &'static str,
}

/// A sample contact record
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: u32,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

/// The fixed project list (6 entries)
///
/// Note: the sample data carries a duplicate id (6) on purpose; nothing
/// enforces uniqueness and consumers must cope with it.
pub fn projects() -> &'static [Project] {
    static PROJECTS: OnceLock<Vec<Project>> = OnceLock::new();
    PROJECTS.get_or_init(|| {
        vec![
            Project {
                client: "Client 1",
                id: 1,
                title: "Project 2",
                due_date: "2024-01-01",
            },
            Project {
                client: "Client 2",
                id: 2,
                title: "Project 1",
                due_date: "2024-02-02",
            },
            Project {
                client: "Client 2",
                id: 3,
                title: "Project 3",
                due_date: "2024-02-03",
            },
            Project {
                client: "Client 3",
                id: 4,
                title: "Project 4",
                due_date: "2024-02-04",
            },
            Project {
                client: "Client 3",
                id: 6,
                title: "Project 5",
                due_date: "2024-02-05",
            },
            Project {
                client: "Client 3",
                id: 6,
                title: "Project 6",
                due_date: "2024-02-06",
            },
        ]
    })
}

/// The fixed contact list (10 entries, ids 1..=10)
pub fn contacts() -> &'static [Contact] {
    static CONTACTS: OnceLock<Vec<Contact>> = OnceLock::new();
    CONTACTS.get_or_init(|| {
        vec![
            Contact {
                id: 1,
                first_name: "Adam",
                last_name: "Presley",
                email: "adam@adampresley.com",
                phone: "555-666-1234",
            },
            Contact {
                id: 2,
                first_name: "Maryanne",
                last_name: "Presley",
                email: "test1@test.com",
                phone: "555-666-1233",
            },
            Contact {
                id: 3,
                first_name: "John",
                last_name: "Doe",
                email: "test2@test.com",
                phone: "555-666-1232",
            },
            Contact {
                id: 4,
                first_name: "Jane",
                last_name: "Doe",
                email: "test3@test.com",
                phone: "555-666-1231",
            },
            Contact {
                id: 5,
                first_name: "Bob",
                last_name: "Smith",
                email: "test4@test.com",
                phone: "555-666-1230",
            },
            Contact {
                id: 6,
                first_name: "Jimmy",
                last_name: "Presley",
                email: "test5@test.com",
                phone: "555-666-1229",
            },
            Contact {
                id: 7,
                first_name: "Sally",
                last_name: "Smith",
                email: "test6@test.com",
                phone: "555-666-1228",
            },
            Contact {
                id: 8,
                first_name: "Joe",
                last_name: "Doe",
                email: "test7@test.com",
                phone: "555-666-1227",
            },
            Contact {
                id: 9,
                first_name: "Jane",
                last_name: "Smith",
                email: "test8@test.com",
                phone: "555-666-1226",
            },
            Contact {
                id: 10,
                first_name: "Bob",
                last_name: "Doe",
                email: "test9@test.com",
                phone: "555-666-1225",
            },
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_sizes() {
        assert_eq!(projects().len(), 6);
        assert_eq!(contacts().len(), 10);
    }

    #[test]
    fn test_contact_ids_are_sequential() {
        for (i, contact) in contacts().iter().enumerate() {
            assert_eq!(contact.id as usize, i + 1);
        }
    }

    #[test]
    fn test_projects_keep_duplicate_id() {
        let dupes = projects().iter().filter(|p| p.id == 6).count();
        assert_eq!(dupes, 2);
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = serde_json::to_value(&projects()[0]).expect("serializable");
        assert!(json.get("dueDate").is_some());
        assert!(json.get("due_date").is_none());

        let json = serde_json::to_value(&contacts()[0]).expect("serializable");
        assert!(json.get("firstName").is_some());
        assert!(json.get("lastName").is_some());
    }
}
