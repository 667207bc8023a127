//! Recitation audio links attached to surah and verse responses
//!
//! Whole-surah recordings come from mp3quran.net, per-verse recordings from
//! everyayah.com. Ids are zero-padded to three digits in both.

use std::collections::BTreeMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecitationType {
    CompleteSurah,
    SingleVerse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioRecitation {
    pub reciter: &'static str,
    pub url: String,
    #[serde(rename = "originalUrl")]
    pub original_url: String,
    #[serde(rename = "type")]
    pub kind: RecitationType,
}

struct Reciter {
    id: &'static str,
    name: &'static str,
    surah_base: &'static str,
    verse_base: &'static str,
}

static RECITERS: [Reciter; 4] = [
    Reciter {
        id: "1",
        name: "Mishary Rashid Al-Afasy",
        surah_base: "https://server8.mp3quran.net/afs/",
        verse_base: "https://everyayah.com/data/Alafasy_128kbps/",
    },
    Reciter {
        id: "2",
        name: "Abu Bakr Al-Shatri",
        surah_base: "https://server11.mp3quran.net/shatri/",
        verse_base: "https://everyayah.com/data/Abu_Bakr_Ash-Shaatree_128kbps/",
    },
    Reciter {
        id: "3",
        name: "Nasser Al-Qatami",
        surah_base: "https://server6.mp3quran.net/qtm/",
        verse_base: "https://everyayah.com/data/Nasser_Alqatami_128kbps/",
    },
    Reciter {
        id: "4",
        name: "Yasser Al-Dosari",
        surah_base: "https://server11.mp3quran.net/yasser/",
        verse_base: "https://everyayah.com/data/Yasser_Ad-Dussary_128kbps/",
    },
];

/// Audio links keyed by reciter id.
pub type AudioData = BTreeMap<&'static str, AudioRecitation>;

fn recitation(reciter: &Reciter, url: String, kind: RecitationType) -> AudioRecitation {
    AudioRecitation {
        reciter: reciter.name,
        original_url: url.clone(),
        url,
        kind,
    }
}

/// Whole-surah recordings from every reciter.
pub fn surah_audio(surah_id: u32) -> AudioData {
    RECITERS
        .iter()
        .map(|r| {
            let url = format!("{}{:03}.mp3", r.surah_base, surah_id);
            (r.id, recitation(r, url, RecitationType::CompleteSurah))
        })
        .collect()
}

/// Single-verse recordings from every reciter.
pub fn verse_audio(surah_id: u32, verse_id: u32) -> AudioData {
    RECITERS
        .iter()
        .map(|r| (r.id, recitation(r, verse_url_for(r, surah_id, verse_id), RecitationType::SingleVerse)))
        .collect()
}

/// Per-verse URL for one reciter; unknown ids use the first reciter.
pub fn verse_audio_url(surah_id: u32, verse_id: u32, reciter_id: &str) -> String {
    let reciter = RECITERS
        .iter()
        .find(|r| r.id == reciter_id)
        .unwrap_or(&RECITERS[0]);
    verse_url_for(reciter, surah_id, verse_id)
}

fn verse_url_for(reciter: &Reciter, surah_id: u32, verse_id: u32) -> String {
    format!("{}{:03}{:03}.mp3", reciter.verse_base, surah_id, verse_id)
}
