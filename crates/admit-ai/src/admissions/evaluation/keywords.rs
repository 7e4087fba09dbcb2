//! Keyword tables consulted by the scoring rules. All entries are lowercase and matched
//! against lowercased applicant text.

/// A family of majors with the AP subjects and activities that signal preparation for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MajorCategory {
    pub name: &'static str,
    /// Fragments of a target-major string that place it in this category.
    pub major_keywords: &'static [&'static str],
    /// Prefixes of AP subject names counted as relevant coursework.
    pub relevant_ap_prefixes: &'static [&'static str],
    pub relevant_activity_keywords: &'static [&'static str],
}

/// Checked in order; the first category whose keyword appears in the major wins.
pub const MAJOR_CATEGORIES: [MajorCategory; 5] = [
    MajorCategory {
        name: "STEM",
        major_keywords: &[
            "computer",
            "engineering",
            "mathematics",
            "physics",
            "chemistry",
            "biology",
            "data science",
            "statistics",
            "earth",
            "geology",
            "environmental",
            "astronomy",
        ],
        relevant_ap_prefixes: &[
            "ap calculus",
            "ap physics",
            "ap chemistry",
            "ap biology",
            "ap computer science",
            "ap statistics",
            "ap environmental science",
        ],
        relevant_activity_keywords: &[
            "research",
            "science olympiad",
            "math team",
            "robotics",
            "coding",
            "hackathon",
        ],
    },
    MajorCategory {
        name: "Humanities",
        major_keywords: &[
            "english",
            "literature",
            "history",
            "philosophy",
            "classics",
            "languages",
        ],
        relevant_ap_prefixes: &[
            "ap english",
            "ap united states history",
            "ap us history",
            "ap world history",
            "ap european history",
            "ap art history",
            "ap spanish",
            "ap french",
            "ap latin",
        ],
        relevant_activity_keywords: &[
            "debate",
            "writing",
            "journalism",
            "literary magazine",
            "model un",
        ],
    },
    MajorCategory {
        name: "Social Sciences",
        major_keywords: &[
            "psychology",
            "sociology",
            "economics",
            "political science",
            "anthropology",
            "government",
        ],
        relevant_ap_prefixes: &[
            "ap psychology",
            "ap united states government",
            "ap us government",
            "ap comparative government",
            "ap macroeconomics",
            "ap microeconomics",
            "ap human geography",
        ],
        relevant_activity_keywords: &[
            "debate",
            "model un",
            "student government",
            "political campaign",
            "research",
        ],
    },
    MajorCategory {
        name: "Business",
        major_keywords: &[
            "business",
            "finance",
            "accounting",
            "marketing",
            "management",
            "entrepreneurship",
        ],
        relevant_ap_prefixes: &[
            "ap macroeconomics",
            "ap microeconomics",
            "ap statistics",
            "ap calculus",
        ],
        relevant_activity_keywords: &[
            "deca",
            "fbla",
            "entrepreneurship",
            "business club",
            "investment club",
        ],
    },
    MajorCategory {
        name: "Arts",
        major_keywords: &["art", "music", "theater", "dance", "film", "design"],
        relevant_ap_prefixes: &["ap art history", "ap studio art", "ap music theory"],
        relevant_activity_keywords: &[
            "art portfolio",
            "music performance",
            "theater",
            "film production",
            "art exhibition",
        ],
    },
];

pub const RESEARCH_KEYWORDS: [&str; 7] = [
    "published",
    "paper",
    "journal",
    "conference",
    "lab",
    "professor",
    "independent",
];

pub const LEADERSHIP_KEYWORDS: [&str; 6] =
    ["president", "founder", "captain", "lead", "director", "chair"];

pub const PRESTIGE_KEYWORDS: [&str; 6] = [
    "international",
    "national",
    "olympiad",
    "intel",
    "regeneron",
    "siemens",
];

pub const UNDERREPRESENTED_STATES: [&str; 5] = [
    "wyoming",
    "montana",
    "north dakota",
    "south dakota",
    "alaska",
];

/// Income brackets that earn a contextual bonus, with the bonus.
pub const INCOME_BRACKET_BONUSES: [(&str, f64); 2] = [("<$30k", 10.0), ("$30k-$75k", 5.0)];

/// High-school types that earn a contextual bonus.
pub const UNDER_RESOURCED_SCHOOL_TYPES: [&str; 2] = ["rural", "title i"];

pub fn match_major(target_major: &str) -> Option<&'static MajorCategory> {
    let major = target_major.to_lowercase();
    if major.trim().is_empty() {
        return None;
    }
    MAJOR_CATEGORIES
        .iter()
        .find(|category| contains_any(&major, category.major_keywords))
}

/// `haystack` must already be lowercase.
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

pub fn count_matches(haystack: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| haystack.contains(*keyword))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_lowercase() {
        for category in &MAJOR_CATEGORIES {
            for entry in category
                .major_keywords
                .iter()
                .chain(category.relevant_ap_prefixes)
                .chain(category.relevant_activity_keywords)
            {
                assert_eq!(*entry, entry.to_lowercase(), "{} entry {entry}", category.name);
            }
        }
    }

    #[test]
    fn first_matching_category_wins() {
        assert_eq!(match_major("Computer Science").map(|c| c.name), Some("STEM"));
        assert_eq!(match_major("Political Science").map(|c| c.name), Some("Social Sciences"));
        assert_eq!(match_major("Art History").map(|c| c.name), Some("Humanities"));
        assert_eq!(match_major("Undecided"), None);
        assert_eq!(match_major("  "), None);
    }

    #[test]
    fn earth_sciences_are_not_read_as_arts() {
        for major in ["Earth Science", "Geology", "Environmental Science", "Astronomy"] {
            assert_eq!(match_major(major).map(|c| c.name), Some("STEM"), "{major}");
        }
        assert_eq!(match_major("Studio Art").map(|c| c.name), Some("Arts"));
    }

    #[test]
    fn counts_distinct_keyword_hits() {
        let text = "published a paper with a professor in a university lab";
        assert_eq!(count_matches(text, &RESEARCH_KEYWORDS), 4);
    }
}
