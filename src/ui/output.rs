use crate::corpus::Verse;
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn header(icon: &str, text: &str) {
    println!("{} {}", icon, text.style(theme().header.clone()));
}

pub fn success(text: &str) {
    println!("{} {}", Icons::CHECK, text.style(theme().success.clone()));
}

pub fn error(text: &str) {
    eprintln!("{} {}", Icons::CROSS, text.style(theme().error.clone()));
}

pub fn warn(text: &str) {
    eprintln!("{} {}", Icons::WARN, text.style(theme().warn.clone()));
}

pub fn info(label: &str, value: &str) {
    println!("{} {}: {}", Icons::INFO, label.style(theme().label.clone()), value);
}

pub fn section(title: &str) {
    println!();
    println!("━ {} ━", title.style(theme().header.clone()));
}

/// One verse: reference, source text, then whichever rendering the corpus carries.
pub fn verse_line(surah_id: u32, verse: &Verse) {
    let reference = format!("{}:{}", surah_id, verse.id);
    println!("  {} {}", reference.style(theme().reference.clone()), verse.text.style(theme().source.clone()));
    if let Some(transliteration) = &verse.transliteration {
        println!("      {}", transliteration.style(theme().dim.clone()));
    }
    if let Some(translation) = &verse.translation {
        println!("      {}", translation);
    }
}
