//! Description and tag inference from filenames.
//!
//! Both heuristics are explicit ordered rule tables evaluated first match
//! wins. The ordering inside each table is significant: `sunlit_dunes.jpg`
//! matches the desert group before the sunrise/sunset group because desert
//! keywords come first.
//!
//! Descriptions resolve in two levels:
//! 1. Known categories (work, personal, gaming, minimal) get a fixed
//!    sentence regardless of filename.
//! 2. Anything else falls through to a keyword scan of the lowercased
//!    filename stem, with a generic fallback phrase when nothing matches.
//!
//! Tags start with the category and append one tag per matching keyword in
//! table order. Duplicates are not deduplicated: a file named `minimal.jpg`
//! in the `minimal` category carries the tag twice, matching the published
//! catalogs.

use crate::naming;

/// Fixed sentences for known categories, checked before any filename scan.
const CATEGORY_DESCRIPTIONS: &[(&str, &str)] = &[
    ("work", "Professional wallpaper for focused work sessions"),
    ("personal", "Vibrant wallpaper for personal time"),
    ("gaming", "Energetic wallpaper for gaming sessions"),
    ("minimal", "Clean, distraction-free wallpaper"),
];

/// Keyword groups matched against the lowercased filename stem.
/// First matching group wins.
const KEYWORD_DESCRIPTIONS: &[(&[&str], &str)] = &[
    (&["desert", "dune"], "Serene desert landscape"),
    (&["ocean", "tide", "wave"], "Calming ocean scene"),
    (&["tree", "forest"], "Natural landscape with trees"),
    (&["mountain", "hill"], "Peaceful mountain vista"),
    (&["river", "boat"], "Tranquil water scene"),
    (&["zen", "garden"], "Zen-inspired peaceful scene"),
    (&["drift", "flow"], "Abstract flowing design"),
    (&["stellar", "star"], "Cosmic starry scene"),
    (&["sunrise", "sunset", "sunlit"], "Beautiful sunrise/sunset scene"),
    (&["crane", "bird"], "Elegant wildlife scene"),
    (&["mist", "fog"], "Misty atmospheric scene"),
];

/// Used when no category rule and no keyword group matches.
const FALLBACK_DESCRIPTION: &str = "Beautiful natural wallpaper";

/// Keyword → tag table. Every matching keyword appends its tag.
const TAG_KEYWORDS: &[(&str, &str)] = &[
    ("dark", "dark"),
    ("light", "light"),
    ("minimal", "minimal"),
    ("abstract", "abstract"),
    ("nature", "nature"),
    ("ocean", "ocean"),
    ("desert", "desert"),
    ("mountain", "mountain"),
    ("tree", "tree"),
    ("forest", "forest"),
    ("water", "water"),
    ("sky", "sky"),
    ("sunset", "sunset"),
    ("sunrise", "sunrise"),
    ("zen", "zen"),
    ("calm", "calm"),
    ("peaceful", "peaceful"),
    ("gradient", "gradient"),
    ("colorful", "colorful"),
    ("blue", "blue"),
    ("green", "green"),
    ("orange", "orange"),
    ("purple", "purple"),
    ("neon", "neon"),
];

/// Derive a description for an image from its category and filename.
pub fn description(filename: &str, category: &str) -> String {
    if let Some((_, sentence)) = CATEGORY_DESCRIPTIONS.iter().find(|(c, _)| *c == category) {
        return (*sentence).to_string();
    }

    let stem = naming::lowercase_stem(filename);
    for (keywords, sentence) in KEYWORD_DESCRIPTIONS {
        if keywords.iter().any(|k| stem.contains(k)) {
            return (*sentence).to_string();
        }
    }
    FALLBACK_DESCRIPTION.to_string()
}

/// Derive tags for an image: the category first, then one tag per keyword
/// found in the lowercased filename stem, in table order.
pub fn tags(filename: &str, category: &str) -> Vec<String> {
    let stem = naming::lowercase_stem(filename);
    let mut tags = vec![category.to_string()];
    for (keyword, tag) in TAG_KEYWORDS {
        if stem.contains(keyword) {
            tags.push((*tag).to_string());
        }
    }
    tags
}
