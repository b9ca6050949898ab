//! Keyword-based topical classification of articles.
//!
//! Matching is plain substring containment on the lowercased
//! `title + " " + description`, walked in the declared category order.
//! Short keywords therefore match inside unrelated words ("us" inside
//! "bonus", "ai" inside "air force"); this is a known limitation kept
//! for parity with the labels consumers already rely on.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Politics,
    Economy,
    #[serde(rename = "Science & Tech")]
    ScienceTech,
    Environment,
    #[serde(rename = "International Affairs")]
    InternationalAffairs,
    Governance,
    #[serde(rename = "Defence & Security")]
    DefenceSecurity,
    Health,
    Education,
    Miscellaneous,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Politics => "Politics",
            Category::Economy => "Economy",
            Category::ScienceTech => "Science & Tech",
            Category::Environment => "Environment",
            Category::InternationalAffairs => "International Affairs",
            Category::Governance => "Governance",
            Category::DefenceSecurity => "Defence & Security",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered keyword table. Earlier entries win when several match.
pub static CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Politics,
        &["modi", "election", "bjp", "parliament", "congress", "cabinet", "manifesto"],
    ),
    (
        Category::Economy,
        &["economy", "gdp", "inflation", "budget", "bank", "fiscal", "monetary"],
    ),
    (
        Category::ScienceTech,
        &["ai", "space", "isro", "tech", "nasa", "quantum", "startups", "innovation"],
    ),
    (
        Category::Environment,
        &["climate", "pollution", "environment", "green", "sustainability", "forest", "wildlife"],
    ),
    (
        Category::InternationalAffairs,
        &["us", "china", "pakistan", "russia", "un", "geopolitics", "diplomacy", "embassy"],
    ),
    (
        Category::Governance,
        &["governance", "bureaucracy", "reform", "policy", "schemes", "implementation"],
    ),
    (
        Category::DefenceSecurity,
        &["army", "navy", "air force", "defence", "terrorism", "military"],
    ),
    (
        Category::Health,
        &["healthcare", "covid", "vaccine", "aiims", "medical"],
    ),
    (
        Category::Education,
        &["education", "neet", "ugc", "schools", "colleges", "exam"],
    ),
];

pub fn match_text(title: &str, description: &str) -> String {
    format!("{} {}", title, description).to_lowercase()
}

pub fn classify(title: &str, description: &str) -> Category {
    let text = match_text(title, description);

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Miscellaneous)
}
