use crate::logs::section::{SectionStat, StatusFamily};
use owo_colors::OwoColorize;
use std::collections::HashMap;

/// Which sections a report shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionSelection {
    /// Only the busiest section; ties go to the lexicographically smallest key.
    Top,
    All,
    /// Exact key matches only.
    Only(Vec<String>),
}

impl SectionSelection {
    pub fn from_options(top: bool, only_sections: &[String]) -> Self {
        if top {
            Self::Top
        } else if only_sections.is_empty() {
            Self::All
        } else {
            Self::Only(only_sections.to_vec())
        }
    }

    /// Pick the sections to report, sorted by key.
    pub fn select(&self, sections: HashMap<String, SectionStat>) -> Vec<SectionStat> {
        match self {
            Self::Top => sections
                .into_values()
                .min_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)))
                .into_iter()
                .collect(),
            Self::All => sorted(sections.into_values().collect()),
            Self::Only(keys) => sorted(
                sections
                    .into_values()
                    .filter(|stat| keys.iter().any(|k| *k == stat.key))
                    .collect(),
            ),
        }
    }
}

fn sorted(mut sections: Vec<SectionStat>) -> Vec<SectionStat> {
    sections.sort_by(|a, b| a.key.cmp(&b.key));
    sections
}

/// `<key>\t<count>\t<family>=<count> ...`
pub fn render_section(stat: &SectionStat, color: bool) -> String {
    let families = stat
        .status_families()
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(family, count)| paint(family, format!("{family}={count}"), color))
        .collect::<Vec<_>>()
        .join(" ");

    format!("{}\t{}\t{}", stat.key, stat.count, families)
}

pub fn render_report(sections: &[SectionStat], color: bool) -> Vec<String> {
    sections.iter().map(|s| render_section(s, color)).collect()
}

fn paint(family: StatusFamily, text: String, color: bool) -> String {
    if !color {
        return text;
    }

    match family {
        StatusFamily::Informational => text,
        StatusFamily::Success => text.green().to_string(),
        StatusFamily::ClientError => text.yellow().to_string(),
        StatusFamily::ServerError => text.red().to_string(),
        StatusFamily::Redirection | StatusFamily::Unknown => text.blue().to_string(),
    }
}
