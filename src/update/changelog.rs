//! "What's new" changelog content
//!
//! The changelog is not localized; it renders the same markup in every
//! language.

/// Heading and bullet items of one release's changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog {
    pub heading: String,
    pub items: Vec<String>,
}

const V1_8_ITEMS: &[&str] = &[
    "Enhancing tab with item analyzer",
    "Click on the magnifying glass to load item details",
    "Can now double click a hero on the Heroes tab to load them on Optimizer tab",
    "Added item attribute to disable modifications on the item",
    "Added custom dark theme colors",
    "Customizeable gear archetypes in settings file",
    "Ehp and Mcd preview in filters",
    "5 star hero indicator",
    "Penetration set used in dmg calculation & target defense setting",
    "Enhance limit optimizer setting",
    "Scores now use reforged values",
    "Added per-unit score evaluation",
    "Increasing optimization threads based on CPU core count",
];

impl Changelog {
    pub fn new(heading: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            items,
        }
    }

    /// Changelog shipped with the current release
    pub fn current() -> Self {
        Self::new(
            "New in v1.8",
            V1_8_ITEMS.iter().map(|item| item.to_string()).collect(),
        )
    }

    /// Render the block handed to the dialog service
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<h2>\n    ");
        html.push_str(&self.heading);
        html.push_str("\n</h2>\n<ul class=\"newFeatures\">\n");
        for item in &self.items {
            html.push_str("    <li>");
            html.push_str(item);
            html.push_str("</li>\n");
        }
        html.push_str("</ul>\n");
        html
    }
}

impl Default for Changelog {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_changelog_has_all_items() {
        let changelog = Changelog::current();
        assert_eq!(changelog.heading, "New in v1.8");
        assert_eq!(changelog.items.len(), 13);
    }

    #[test]
    fn test_html_structure() {
        let html = Changelog::new("New in v2.0", vec!["One".into(), "Two".into()]).to_html();
        assert!(html.starts_with("<h2>"));
        assert!(html.contains("New in v2.0"));
        assert!(html.contains("<ul class=\"newFeatures\">"));
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.trim_end().ends_with("</ul>"));
    }
}
