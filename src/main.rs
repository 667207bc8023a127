//! Quran API CLI - serve the corpus over HTTP or query it from the terminal

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use quran_api::audio;
use quran_api::config::{self, QuranConfig};
use quran_api::corpus::{parse_surah_id, parse_verse_id, CorpusLoader, CorpusSource};
use quran_api::resolver::LanguageResolver;
use quran_api::server::{self, AppState};
use quran_api::ui::{self, Icons};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "quran-api")]
#[command(version)]
#[command(about = "Read-only Quran corpus API with verse search")]
#[command(long_about = r#"
Serves a multi-language Quran corpus from JSON files on disk.

Corpus files live in one directory:
  quran.json                   source text (ar)
  quran_transliteration.json   transliteration
  quran_<code>.json            translations (en, bn, fr, ...)

Example usage:
  quran-api serve --port 3000 --data-dir ./data/quran
  quran-api search "mercy" --lang en
  quran-api verse 2 255 --lang en
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print JSON instead of formatted output
    #[arg(long, global = true)]
    json: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory containing the corpus files
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },

    /// List the known languages and whether their corpus is present
    Languages,

    /// List the surahs of a corpus
    Surahs {
        /// Language code
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Search verses
    Search {
        /// Search text (at least 3 characters)
        query: String,

        /// Language code
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Show a whole surah
    Surah {
        /// Surah number (1-114)
        id: String,

        /// Language code
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Show a single verse
    Verse {
        /// Surah number (1-114)
        surah: String,

        /// Verse number
        verse: String,

        /// Language code
        #[arg(short, long)]
        lang: Option<String>,

        /// Reciter id for the audio link
        #[arg(short, long, default_value = "1")]
        reciter: String,
    },

    /// Write a config file with default values
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(cli).await {
        ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let file_config = config::load_config(cli.config.as_deref())?.unwrap_or_default();
    let flag_config = QuranConfig {
        data_dir: cli.data_dir.map(|p| p.to_string_lossy().into_owned()),
        ..Default::default()
    };
    let base = file_config.merge(flag_config);

    match cli.command {
        Commands::Serve { host, port } => {
            let settings = base.merge(QuranConfig { host, port, data_dir: None }).settings();
            server::start_server(&settings.host, settings.port, settings.data_dir).await?;
        }

        Commands::Languages => {
            let settings = base.settings();
            let loader = Arc::new(CorpusLoader::new(&settings.data_dir));
            let resolver = LanguageResolver::new(loader.clone());
            let languages = resolver.list_supported();

            if cli.json {
                println!("{}", serde_json::to_string_pretty(languages)?);
            } else {
                let mut present = Vec::new();
                for language in languages {
                    if loader.has_corpus(language.code).await {
                        present.push(language.code);
                    }
                }

                ui::header(Icons::GLOBE, "Languages");
                ui::info("Corpus directory", &settings.data_dir.display().to_string());
                println!("{}", ui::languages_table(languages, |code| present.iter().any(|p| *p == code)));
            }
        }

        Commands::Surahs { lang } => {
            let state = AppState::from_dir(base.settings().data_dir);
            let lang = state.resolver.resolve(lang.as_deref()).await;
            let document = state.cache.get(&lang).await?;
            let surahs = document.surah_infos();

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&surahs)?);
            } else {
                ui::header(Icons::BOOK, &format!("Surahs ({})", lang));
                println!("{}", ui::surahs_table(&surahs));
            }
        }

        Commands::Search { query, lang } => {
            let state = AppState::from_dir(base.settings().data_dir);
            let lang = state.resolver.resolve(lang.as_deref()).await;
            let document = state.cache.get(&lang).await?;
            let found = state.search.search(&document, &lang, &query)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else if found.is_empty() {
                ui::warn(&format!("No verses match '{}'", query));
            } else {
                ui::header(Icons::SEARCH, &format!("'{}' in {}", query, lang));
                for group in &found.results {
                    ui::section(&format!("{}. {}", group.surah.id, group.surah.transliteration));
                    for verse in &group.verses {
                        ui::verse_line(group.surah.id, verse);
                    }
                }
                println!();
                println!(
                    "{}",
                    ui::summary_table(&[
                        ("Surahs", found.results.len().to_string()),
                        ("Verses", found.total.to_string()),
                    ])
                );
            }
        }

        Commands::Surah { id, lang } => {
            let surah_id = parse_surah_id(&id)?;
            let state = AppState::from_dir(base.settings().data_dir);
            let lang = state.resolver.resolve(lang.as_deref()).await;
            let document = state.cache.get(&lang).await?;
            let surah = document.surah(surah_id)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(surah)?);
            } else {
                let title = match &surah.translation {
                    Some(t) => format!("{}. {} - {} ({})", surah.id, surah.transliteration, t, surah.name),
                    None => format!("{}. {} ({})", surah.id, surah.transliteration, surah.name),
                };
                ui::header(Icons::BOOK, &title);
                ui::info("Type", &surah.kind);
                ui::info("Verses", &surah.total_verses.to_string());
                println!();
                for verse in &surah.verses {
                    ui::verse_line(surah.id, verse);
                }
            }
        }

        Commands::Verse { surah, verse, lang, reciter } => {
            let surah_id = parse_surah_id(&surah)?;
            let verse_id = parse_verse_id(&verse)?;
            let state = AppState::from_dir(base.settings().data_dir);
            let lang = state.resolver.resolve(lang.as_deref()).await;
            let document = state.cache.get(&lang).await?;
            let (surah, verse) = document.verse(surah_id, verse_id)?;
            let audio_url = audio::verse_audio_url(surah_id, verse.id, &reciter);

            if cli.json {
                let value = serde_json::json!({
                    "language": lang,
                    "surah": surah.summary(),
                    "verse": verse,
                    "audio": audio_url,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                ui::header(Icons::BOOK, &format!("{} {}:{}", surah.transliteration, surah.id, verse.id));
                ui::verse_line(surah.id, verse);
                println!();
                ui::info(&format!("{} Audio", Icons::SPEAKER), &audio_url);
            }
        }

        Commands::InitConfig { force } => {
            let path = cli.config.unwrap_or_else(config::default_config_path);
            config::write_config(&path, &QuranConfig::with_defaults(), force)?;
            ui::success(&format!("Wrote {}", path.display()));
        }
    }

    Ok(())
}
