use tabled::{settings::Style, Table, Tabled};
use crate::corpus::SurahInfo;
use crate::language::Language;

#[derive(Tabled)]
struct LanguageRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Native")]
    native: &'static str,
    #[tabled(rename = "Dir")]
    direction: &'static str,
    #[tabled(rename = "On disk")]
    present: &'static str,
}

#[derive(Tabled)]
struct SurahRow {
    #[tabled(rename = "#")]
    id: u32,
    #[tabled(rename = "Name")]
    transliteration: String,
    #[tabled(rename = "Translation")]
    translation: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Verses")]
    total_verses: u32,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Language table; `present` reports whether each corpus file exists.
pub fn languages_table(languages: &[Language], present: impl Fn(&str) -> bool) -> String {
    let rows: Vec<LanguageRow> = languages
        .iter()
        .map(|lang| LanguageRow {
            code: lang.code,
            name: lang.display_name,
            native: lang.native_name,
            direction: lang.text_direction.as_str(),
            present: if present(lang.code) { "yes" } else { "no" },
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn surahs_table(surahs: &[SurahInfo]) -> String {
    let rows: Vec<SurahRow> = surahs
        .iter()
        .map(|s| SurahRow {
            id: s.id,
            transliteration: s.transliteration.clone(),
            translation: s.translation.clone().unwrap_or_default(),
            kind: s.kind.clone(),
            total_verses: s.total_verses,
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn summary_table(stats: &[(&str, String)]) -> String {
    if stats.is_empty() {
        return String::new();
    }
    let rows: Vec<SummaryRow> = stats
        .iter()
        .map(|(metric, value)| SummaryRow {
            metric: metric.to_string(),
            value: value.clone(),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}
