//! # Repository Module
//!
//! In-memory repositories for the back-office screens.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Dashboard Command                                                     │
//! │       │                                                                 │
//! │       │  "Give me the available menu"                                  │
//! │       ▼                                                                 │
//! │  ┌─────────────────────┐                                               │
//! │  │ CatalogRepository   │  ← Validates writes, owns the Vec            │
//! │  │                     │                                               │
//! │  │ • available()       │                                               │
//! │  │ • search()          │                                               │
//! │  │ • add() / update()  │                                               │
//! │  └──────────┬──────────┘                                               │
//! │             │                                                           │
//! │             ▼                                                           │
//! │  Vec<MenuItem> in display order (seeded from embedded JSON)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation validates first and only then touches the collection, so a
//! rejected write leaves the repository exactly as it was.

pub mod catalog;
pub mod deals;
pub mod staff;

/// Case-insensitive substring match against an already-lowercased needle.
pub(crate) fn matches_query(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_query() {
        assert!(matches_query("Chicken Biryani", "biry"));
        assert!(matches_query("Chicken Biryani", ""));
        assert!(!matches_query("Karahi", "burger"));
    }
}
