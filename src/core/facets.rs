use std::collections::BTreeSet;
use crate::models::{Facets, Profile};

/// Collect distinct instrument and genre names, sorted ascending
pub fn collect_facets(profiles: &[Profile]) -> Facets {
    Facets {
        instruments: distinct_sorted(profiles.iter().flat_map(|p| p.instruments.iter())),
        genres: distinct_sorted(profiles.iter().flat_map(|p| p.genres.iter())),
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(instruments: &[&str], genres: &[&str]) -> Profile {
        Profile {
            id: "id".to_string(),
            name: "name".to_string(),
            location: String::new(),
            instruments: instruments.iter().map(|s| s.to_string()).collect(),
            genres: genres.iter().map(|s| s.to_string()).collect(),
            bio: String::new(),
            email: String::new(),
            portfolio: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_facets_sorted_and_deduplicated() {
        let profiles = vec![
            profile(&["Violin", "Piano"], &["Jazz", "Classical"]),
            profile(&["Piano", "Bass"], &["Jazz"]),
        ];

        let facets = collect_facets(&profiles);
        assert_eq!(facets.instruments, vec!["Bass", "Piano", "Violin"]);
        assert_eq!(facets.genres, vec!["Classical", "Jazz"]);
    }

    #[test]
    fn test_empty_catalog_has_no_facets() {
        assert_eq!(collect_facets(&[]), Facets::default());
    }
}
