use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use offense_dashboard_core::Section;

/// Best fuzzy match of `query` against each section's id and label.
///
/// Ties keep the earlier tab. Blank queries match nothing.
pub fn resolve_section(query: &str) -> Option<Section> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let mut best: Option<(i64, Section)> = None;
    for section in Section::ALL {
        let choice = format!("{} {}", section.id(), section.label());
        if let Some(score) = matcher.fuzzy_match(&choice, query) {
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, section));
            }
        }
    }
    best.map(|(_, section)| section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ids_and_labels() {
        assert_eq!(resolve_section("stat"), Some(Section::Statistics));
        assert_eq!(resolve_section("comp"), Some(Section::Composition));
        assert_eq!(resolve_section("Executive"), Some(Section::Summary));
        assert_eq!(resolve_section("implications"), Some(Section::Implications));
    }

    #[test]
    fn rejects_blank_and_unmatched() {
        assert_eq!(resolve_section(""), None);
        assert_eq!(resolve_section("   "), None);
        assert_eq!(resolve_section("zzz"), None);
    }
}
