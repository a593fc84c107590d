//! Demographic extraction rules
//!
//! Pattern-matches one lowercased text item against a fixed rule set and
//! fills still-unknown demographic fields. Fields are write-once across a
//! run; the single-status keyword check is the one within-item exception
//! (see `extract`).
//!
//! Every pattern captures its extracted value in group 2, and the extractor
//! reads group 2 uniformly. For the occupation rule that group is the
//! article (`a`/`an`), not the occupation phrase; the stored occupation
//! value is therefore the article. This mirrors the original rule set and is
//! kept intentionally.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Demographics;

// Terminators are consumed rather than asserted with lookahead; group 2 sits
// before them, so the captured value is unchanged. For the location rule end
// of text also counts as a terminator, so trailing phrases like
// "...live in denver" still extract; the occupation rule requires an explicit
// terminator and does not match at end of text.
static AGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(i'm|i am|being)\s+(\d{1,2})\s+(years old|yo|old)\b")
        .expect("age pattern is valid")
});

static OCCUPATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(i'm|i am|my job is|i work as|working as)\s+(a|an)\s+([\w\s]+?)(\.|,|\s+and|\s+but|\s+in)")
        .expect("occupation pattern is valid")
});

static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(live in|living in|from)\s+([\w\s,]+?)(\.|,|\s+and|\s+but|\s+so|$)")
        .expect("location pattern is valid")
});

static PARTNER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bmy\s+(wife|husband|partner|girlfriend|boyfriend)\b")
        .expect("partner pattern is valid")
});

/// Phrases that mark the author as single
const SINGLE_PHRASES: &[&str] = &["i'm single", "i am single", "being single"];

/// Status value stored when a partner mention is found
const STATUS_PARTNERED: &str = "In a relationship";

/// Status value stored when a single phrase is found
const STATUS_SINGLE: &str = "Single";

/// Run all demographic rules against one lowercased text item.
///
/// Rules are checked in fixed order: age, occupation, location, status.
/// Each still-unknown field receives at most one value per item. The
/// single-phrase check may overwrite a partner match from the same item, but
/// a status frozen by an earlier item is never changed.
pub fn extract(text: &str, demographics: &mut Demographics) {
    if demographics.age.is_unknown() {
        if let Some(value) = capture_value(&AGE_RE, text) {
            demographics.age.fill(value);
        }
    }

    if demographics.occupation.is_unknown() {
        if let Some(value) = capture_value(&OCCUPATION_RE, text) {
            demographics.occupation.fill(value);
        }
    }

    if demographics.location.is_unknown() {
        if let Some(value) = capture_value(&LOCATION_RE, text) {
            demographics.location.fill(value);
        }
    }

    // Status was frozen by an earlier item; neither rule may touch it.
    if !demographics.status.is_unknown() {
        return;
    }

    if PARTNER_RE.is_match(text) {
        demographics.status.fill(STATUS_PARTNERED);
    }

    // Runs after the partner rule on purpose: within the same item a single
    // phrase wins over a partner mention.
    if SINGLE_PHRASES.iter().any(|phrase| text.contains(phrase)) {
        demographics.status.overwrite(STATUS_SINGLE);
    }
}

/// Run a pattern and return the trimmed contents of capture group 2
fn capture_value(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_from(text: &str) -> Demographics {
        let mut demographics = Demographics::default();
        extract(&text.to_lowercase(), &mut demographics);
        demographics
    }

    #[test]
    fn test_age_extraction() {
        let d = extract_from("I am 29 years old and live in Denver");
        assert_eq!(d.age.value, "29");

        let d = extract_from("i'm 42 yo and tired");
        assert_eq!(d.age.value, "42");

        let d = extract_from("being 8 old is great");
        assert_eq!(d.age.value, "8");
    }

    #[test]
    fn test_age_requires_lead_in_and_unit() {
        let d = extract_from("there were 29 people there");
        assert!(d.age.is_unknown());

        let d = extract_from("i am 29");
        assert!(d.age.is_unknown());
    }

    #[test]
    fn test_age_rejects_three_digit_numbers() {
        let d = extract_from("i am 123 years old");
        assert!(d.age.is_unknown());
    }

    #[test]
    fn test_occupation_stores_the_article() {
        // The occupation rule captures the article, not the phrase.
        let d = extract_from("I work as a nurse and love it.");
        assert_eq!(d.occupation.value, "a");

        let d = extract_from("i am an engineer.");
        assert_eq!(d.occupation.value, "an");
    }

    #[test]
    fn test_occupation_requires_article() {
        let d = extract_from("i work as nurse");
        assert!(d.occupation.is_unknown());
    }

    #[test]
    fn test_occupation_requires_terminator() {
        // Unlike the location rule, end of text does not terminate the
        // occupation phrase; without a terminator the field must stay
        // unknown so a later item can still fill it.
        let d = extract_from("i am a teacher");
        assert!(d.occupation.is_unknown());

        let mut demographics = Demographics::default();
        extract("i am a teacher", &mut demographics);
        extract("i work as a nurse.", &mut demographics);
        assert_eq!(demographics.occupation.value, "a");
    }

    #[test]
    fn test_location_extraction() {
        let d = extract_from("I am 29 years old and live in Denver");
        assert_eq!(d.location.value, "denver");

        let d = extract_from("living in new york, so busy");
        assert_eq!(d.location.value, "new york");

        let d = extract_from("i moved from portland but it rains");
        assert_eq!(d.location.value, "portland");
    }

    #[test]
    fn test_location_terminates_at_end_of_text() {
        let d = extract_from("these days i live in amsterdam");
        assert_eq!(d.location.value, "amsterdam");
    }

    #[test]
    fn test_partner_sets_relationship_status() {
        for partner in ["wife", "husband", "partner", "girlfriend", "boyfriend"] {
            let d = extract_from(&format!("my {} and I are happy", partner));
            assert_eq!(d.status.value, "In a relationship", "partner: {}", partner);
        }
    }

    #[test]
    fn test_single_phrase_sets_single() {
        let d = extract_from("I'm single and love my dog");
        assert_eq!(d.status.value, "Single");

        let d = extract_from("being single has its perks");
        assert_eq!(d.status.value, "Single");
    }

    #[test]
    fn test_single_overrides_partner_within_same_item() {
        let d = extract_from("my wife left, i am single now");
        assert_eq!(d.status.value, "Single");
    }

    #[test]
    fn test_status_frozen_across_items() {
        let mut demographics = Demographics::default();
        extract("my wife and i are happy", &mut demographics);
        assert_eq!(demographics.status.value, "In a relationship");

        // A later item cannot change a frozen status, even with a single phrase.
        extract("i am single now", &mut demographics);
        assert_eq!(demographics.status.value, "In a relationship");
    }

    #[test]
    fn test_fields_write_once_across_items() {
        let mut demographics = Demographics::default();
        extract("i am 29 years old", &mut demographics);
        extract("i am 35 years old", &mut demographics);
        assert_eq!(demographics.age.value, "29");

        extract("i live in denver", &mut demographics);
        extract("i live in tokyo", &mut demographics);
        assert_eq!(demographics.location.value, "denver");
    }

    #[test]
    fn test_multiple_fields_from_one_item() {
        let d = extract_from("I am 29 years old and live in Denver");
        assert_eq!(d.age.value, "29");
        assert_eq!(d.location.value, "denver");
        assert!(d.occupation.is_unknown());
        assert!(d.status.is_unknown());
    }
}
