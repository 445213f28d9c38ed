//! Command-line front end for the Pocket organizer.
//!
//! # Responsibility
//! - Parse user commands and forward them to `pocket_core::Session`.
//! - Render returned state and outcomes; no business rules live here.

mod render;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pocket_core::{
    init_logging_from_config, Clock, CoreConfig, MemoryStore, PersistentStore, Session,
    SqliteStore, SystemClock, ASSOCIATION_WORDS, EMOTION_CHOICES,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pocket", about = "Local notes, games, music and advice", version)]
struct Cli {
    /// Directory holding the local store and logs (defaults to $POCKET_DATA_DIR or a temp dir).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Use a throwaway in-memory store.
    #[arg(long, global = true)]
    memory: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Greeting and note summary.
    Home,
    /// Manage notes.
    #[command(subcommand)]
    Notes(NotesCommand),
    /// Show or change preferences.
    #[command(subcommand)]
    Settings(SettingsCommand),
    /// Show or save the playlist reference.
    Playlist {
        /// New playlist reference; stored as typed.
        reference: Option<String>,
    },
    /// Play a mini-game.
    #[command(subcommand)]
    Game(GameCommand),
    /// Get advice for the current time of day.
    Advice {
        /// Turn the advice into a new note.
        #[arg(long)]
        save: bool,
    },
    /// Export notes as pretty JSON.
    Export {
        /// Target directory (defaults to the current directory).
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
enum NotesCommand {
    /// List notes, optionally filtered.
    List {
        #[arg(long, short = 'q', default_value = "")]
        query: String,
    },
    /// Create a note.
    Add(AddNote),
    /// Delete a note by id.
    Delete { id: String },
}

#[derive(Debug, Args)]
struct AddNote {
    #[arg(long)]
    title: String,
    #[arg(long)]
    content: String,
    /// Comma-separated tags.
    #[arg(long, default_value = "")]
    tags: String,
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    Show,
    /// Switch between light and dark theme.
    Theme,
    /// Change the display name.
    Name { name: String },
}

#[derive(Debug, Subcommand)]
enum GameCommand {
    /// Guess the emotion (+10 points for the right one). Lists the choices
    /// when no answer is given.
    Emotion { answer: Option<String> },
    /// Pick a word that feels cozy. Lists the words when none is given.
    Words { word: Option<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = CoreConfig::resolve(cli.data_dir.as_deref());
    if let Some(level) = cli.log_level.as_deref() {
        config = config.with_log_level(level);
    }

    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("logging disabled: {err}");
    }

    if cli.memory {
        let session = Session::bootstrap(MemoryStore::new(), SystemClock);
        return run(session, cli.command);
    }

    let store = SqliteStore::open(config.db_path())
        .with_context(|| format!("failed to open store at {}", config.db_path().display()))?;
    run(Session::bootstrap(store, SystemClock), cli.command)
}

fn run<S, C>(mut session: Session<S, C>, command: Option<Command>) -> Result<()>
where
    S: PersistentStore,
    C: Clock,
{
    match command.unwrap_or(Command::Home) {
        Command::Home => render::home(&session),
        Command::Notes(NotesCommand::List { query }) => {
            render::notes(&session.search(&query));
        }
        Command::Notes(NotesCommand::Add(add)) => {
            session.update_draft(&add.title, &add.content, &add.tags);
            match session.create_note_from_draft() {
                Ok(note) => println!("Заметка сохранена ✅ ({})", note.id),
                Err(err) if err.is_validation() => {
                    println!("Заполни название и текст заметки");
                }
                Err(err) => return Err(err).context("failed to save note"),
            }
        }
        Command::Notes(NotesCommand::Delete { id }) => {
            session.delete_note(&id).context("failed to delete note")?;
            println!("Заметка удалена");
        }
        Command::Settings(SettingsCommand::Show) => render::settings(session.settings()),
        Command::Settings(SettingsCommand::Theme) => {
            let settings = session.toggle_theme().context("failed to save settings")?;
            render::settings(&settings);
        }
        Command::Settings(SettingsCommand::Name { name }) => {
            let settings = session
                .set_username(&name)
                .context("failed to save settings")?;
            render::settings(&settings);
        }
        Command::Playlist { reference: None } => render::playlist(session.playlist()),
        Command::Playlist {
            reference: Some(reference),
        } => {
            session
                .save_playlist(&reference)
                .context("failed to save playlist")?;
            println!("Плейлист сохранён ✅");
        }
        Command::Game(GameCommand::Emotion { answer: None }) => {
            render::choices(
                "Ситуация: \"Получила подарок от близкого человека\"",
                EMOTION_CHOICES,
            );
        }
        Command::Game(GameCommand::Emotion {
            answer: Some(answer),
        }) => {
            let outcome = session
                .answer_emotion(&answer.to_lowercase())
                .context("failed to save score")?;
            if outcome.correct {
                println!("Правильно! +10 баллов 🎉 Счёт: {}", outcome.new_score);
            } else {
                println!("Попробуй ещё раз! Счёт: {}", outcome.new_score);
            }
        }
        Command::Game(GameCommand::Words { word: None }) => {
            render::choices("Выбери слова, связанные с \"Уют\"", ASSOCIATION_WORDS);
        }
        Command::Game(GameCommand::Words { word: Some(word) }) => {
            if session.answer_association(&word) {
                println!("Правильно! ✨");
            } else {
                println!("Попробуй другое слово");
            }
        }
        Command::Advice { save } => {
            let Some(advice) = session.next_advice() else {
                println!("Советов пока нет");
                return Ok(());
            };
            render::advice(&advice);
            if save {
                session.advice_to_draft();
                let note = session
                    .create_note_from_draft()
                    .context("failed to save advice as note")?;
                println!("Совет добавлен в заметки! ({})", note.id);
            }
        }
        Command::Export { dir } => {
            let path = session.export_notes(&dir).context("failed to export notes")?;
            println!("Заметки экспортированы: {}", path.display());
        }
    }
    Ok(())
}
