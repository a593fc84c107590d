//! Report rendering
//!
//! Formats a completed persona into a human-readable text document and
//! writes it to disk. Set-backed fields render in lexicographic order so the
//! output is reproducible run to run.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::OutputSettings;
use crate::error::{Error, Result};
use crate::types::Persona;

/// Default report file name for a username
pub fn default_report_path(output_dir: &Path, username: &str) -> PathBuf {
    output_dir.join(format!("persona_{}.txt", username))
}

/// Render the persona document
pub fn render(persona: &Persona, settings: &OutputSettings) -> String {
    let mut out = String::new();

    out.push_str(&format!("USER PERSONA: u/{}\n", persona.username));
    out.push_str(&format!("{}\n\n", "=".repeat(40)));

    // Demographics
    out.push_str("## DEMOGRAPHICS (Inferred)\n");
    out.push_str(&format!("- **Age:** {}\n", persona.demographics.age.value));
    out.push_str(&format!("- **Location:** {}\n", persona.demographics.location.value));
    out.push_str(&format!("- **Occupation:** {}\n", persona.demographics.occupation.value));
    out.push_str(&format!("- **Status:** {}\n", persona.demographics.status.value));
    out.push('\n');

    // Motivations
    out.push_str("## MOTIVATIONS (Inferred from activity)\n");
    if persona.motivations.is_empty() {
        out.push_str("- Motivations not clearly identified from recent activity.\n");
    } else {
        for motivation in &persona.motivations {
            out.push_str(&format!("- {}\n", motivation));
        }
    }
    out.push('\n');

    // Personality
    out.push_str("## PERSONALITY TRAITS (Inferred from language)\n");
    if persona.personality_traits.is_empty() {
        out.push_str("- Personality traits not clearly identified from recent activity.\n");
    } else {
        let traits: Vec<&str> = persona.personality_traits.iter().map(String::as_str).collect();
        out.push_str(&format!("- Appears to be: {}\n", traits.join(", ")));
    }
    out.push('\n');

    // Behaviour and Habits
    out.push_str("## BEHAVIOUR & HABITS\n");
    if persona.behaviour_and_habits.is_empty() {
        out.push_str("- No specific habits identified.\n");
    } else {
        for habit in &persona.behaviour_and_habits {
            out.push_str(&format!("- {}\n", habit));
        }
    }
    out.push('\n');

    // Goals and Needs
    out.push_str("## GOALS & NEEDS (Inferred)\n");
    if persona.goals_and_needs.is_empty() {
        out.push_str("- No specific goals identified from recent activity.\n");
    } else {
        for snippet in persona.goals_and_needs.iter().take(settings.snippet_limit) {
            out.push_str(&format!(" \"{}\"\n", truncate(snippet, settings.snippet_max_chars)));
        }
    }
    out.push('\n');

    // Frustrations / Pain Points
    out.push_str("## FRUSTRATIONS\n");
    if persona.frustrations.is_empty() {
        out.push_str("- No specific frustrations identified from recent activity.\n");
    } else {
        for snippet in persona.frustrations.iter().take(settings.snippet_limit) {
            out.push_str(&format!(" \"{}\"\n", truncate(snippet, settings.snippet_max_chars)));
        }
    }
    out.push('\n');

    out
}

/// Render the persona and write it to `path`
pub fn write_report(persona: &Persona, path: &Path, settings: &OutputSettings) -> Result<()> {
    let document = render(persona, settings);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| Error::IoWrite {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    fs::write(path, document).map_err(|e| Error::IoWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(path = %path.display(), "Persona report written");
    Ok(())
}

/// Truncate a snippet to `max_chars` characters and append an ellipsis
/// marker. Counts characters, not bytes.
fn truncate(text: &str, max_chars: usize) -> String {
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::build_from_items;
    use crate::types::TextItem;
    use tempfile::TempDir;

    fn settings() -> OutputSettings {
        OutputSettings::default()
    }

    #[test]
    fn test_default_report_path() {
        let path = default_report_path(Path::new("/tmp/reports"), "alice");
        assert_eq!(path, PathBuf::from("/tmp/reports/persona_alice.txt"));
    }

    #[test]
    fn test_empty_persona_renders_fallbacks() {
        let persona = build_from_items("quietuser", &[]);
        let doc = render(&persona, &settings());

        assert!(doc.contains("USER PERSONA: u/quietuser"));
        assert!(doc.contains("- **Age:** Unknown"));
        assert!(doc.contains("- **Status:** Unknown"));
        assert!(doc.contains("Motivations not clearly identified"));
        assert!(doc.contains("Personality traits not clearly identified"));
        assert!(doc.contains("No specific habits identified"));
        assert!(doc.contains("No specific goals identified"));
        assert!(doc.contains("No specific frustrations identified"));
    }

    #[test]
    fn test_sections_appear_in_order() {
        let persona = build_from_items("user", &[]);
        let doc = render(&persona, &settings());

        let positions: Vec<usize> = [
            "## DEMOGRAPHICS",
            "## MOTIVATIONS",
            "## PERSONALITY TRAITS",
            "## BEHAVIOUR & HABITS",
            "## GOALS & NEEDS",
            "## FRUSTRATIONS",
        ]
        .iter()
        .map(|section| doc.find(section).expect("section present"))
        .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_traits_render_sorted_and_comma_joined() {
        let mut persona = build_from_items("user", &[]);
        persona.personality_traits.insert("Helpful".to_string());
        persona.personality_traits.insert("Analytical".to_string());

        let doc = render(&persona, &settings());
        assert!(doc.contains("- Appears to be: Analytical, Helpful\n"));
    }

    #[test]
    fn test_motivations_render_sorted_bullets() {
        let mut persona = build_from_items("user", &[]);
        persona.motivations.insert("Wellness & Health".to_string());
        persona.motivations.insert("Career & Learning".to_string());

        let doc = render(&persona, &settings());
        let career = doc.find("- Career & Learning").unwrap();
        let wellness = doc.find("- Wellness & Health").unwrap();
        assert!(career < wellness);
    }

    #[test]
    fn test_snippets_truncated_with_ellipsis() {
        let long_text = format!("I hate that {}", "x".repeat(200));
        let items = vec![TextItem::new(long_text.clone(), "rant")];
        let persona = build_from_items("user", &items);

        let doc = render(&persona, &settings());
        let expected: String = long_text.chars().take(100).collect();
        assert!(doc.contains(&format!(" \"{}...\"\n", expected)));
        assert!(!doc.contains(&long_text));
    }

    #[test]
    fn test_at_most_three_snippets() {
        let items: Vec<TextItem> = (0..5)
            .map(|i| TextItem::new(format!("snippet {} is annoying", i), "rant"))
            .collect();
        let persona = build_from_items("user", &items);
        assert_eq!(persona.frustrations.len(), 5);

        let doc = render(&persona, &settings());
        let frustration_section = &doc[doc.find("## FRUSTRATIONS").unwrap()..];
        assert_eq!(frustration_section.matches("...\"").count(), 3);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "é".repeat(150);
        let truncated = truncate(&text, 100);
        assert_eq!(truncated.chars().count(), 103); // 100 chars + "..."
    }

    #[test]
    fn test_write_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = default_report_path(temp_dir.path(), "alice");

        let persona = build_from_items("alice", &[]);
        write_report(&persona, &path, &settings()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("USER PERSONA: u/alice"));
    }

    #[test]
    fn test_write_report_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("persona_bob.txt");

        let persona = build_from_items("bob", &[]);
        write_report(&persona, &path, &settings()).unwrap();
        assert!(path.exists());
    }
}
