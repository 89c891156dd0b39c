//! Finishing transforms applied after the line scan

use crate::domain::note::Link;
use std::collections::{HashMap, HashSet};

/// Deduplicate while preserving order of first occurrence
pub fn unique_in_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            unique.push(item);
        }
    }
    unique
}

/// Group link targets by exact equality and count them.
///
/// One `Link` per distinct target, emitted in first-seen order.
pub fn link_frequencies<I>(items: I) -> Vec<Link>
where
    I: IntoIterator<Item = String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut links: Vec<Link> = Vec::new();

    for item in items {
        match index.get(&item).copied() {
            Some(pos) => links[pos].count += 1,
            None => {
                index.insert(item.clone(), links.len());
                links.push(Link::new(item, 1));
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unique_keeps_first_occurrence() {
        let tags = unique_in_order(strings(&["tag1", "tag2", "tag2", "tag1", "tag3"]));
        assert_eq!(tags, vec!["tag1", "tag2", "tag3"]);
    }

    #[test]
    fn test_unique_is_case_sensitive() {
        let tags = unique_in_order(strings(&["Work", "work"]));
        assert_eq!(tags, vec!["Work", "work"]);
    }

    #[test]
    fn test_unique_empty() {
        assert!(unique_in_order(Vec::new()).is_empty());
    }

    #[test]
    fn test_link_frequencies_counts() {
        let links = link_frequencies(strings(&["Thrift", "GRPC", "GRPC", "Thrift", "SOAP"]));
        assert_eq!(
            links,
            vec![
                Link::new("Thrift", 2),
                Link::new("GRPC", 2),
                Link::new("SOAP", 1)
            ]
        );
    }

    #[test]
    fn test_link_frequencies_exact_match_only() {
        let links = link_frequencies(strings(&["grpc", "GRPC"]));
        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|l| l.count == 1));
    }
}
