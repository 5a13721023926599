//! Display names derived from stored ids
//!
//! Ids are stored normalized (`new_york`), display names are computed
//! (`New York`). Nothing here is ever persisted.

/// `new_york` -> `New York`
pub fn humanize(id: &str) -> String {
    let spaced = id.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut at_word_start = true;

    for c in spaced.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

/// `New York` -> `new_york`
pub fn dehumanize(name: &str) -> String {
    name.replace(' ', "_").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_title_cases_each_word() {
        assert_eq!(humanize("new_york"), "New York");
        assert_eq!(humanize("law_and_order"), "Law And Order");
        assert_eq!(humanize("TEXAS"), "Texas");
    }

    #[test]
    fn test_dehumanize_round_trips_place_names() {
        assert_eq!(dehumanize("New Hampshire"), "new_hampshire");
        assert_eq!(humanize(&dehumanize("West Virginia")), "West Virginia");
    }

    #[test]
    fn test_humanize_capitalizes_after_punctuation() {
        assert_eq!(humanize("coeur_d'alene"), "Coeur D'Alene");
    }
}
