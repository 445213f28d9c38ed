//! Plain-text rendering of session state.

use chrono::{Local, TimeZone};
use pocket_core::{AdviceEntry, Clock, Note, PersistentStore, Session, Settings, Theme};

pub fn home<S: PersistentStore, C: Clock>(session: &Session<S, C>) {
    let summary = session.summary();
    println!("{}, {} 🌸", session.greeting(), session.settings().username);
    println!("Всего заметок: {}", summary.note_count);
    println!(
        "Последняя заметка: {}",
        summary.latest_title.as_deref().unwrap_or("Пока нет заметок")
    );
    println!("Баллы: {}", session.score());
}

pub fn notes(notes: &[Note]) {
    if notes.is_empty() {
        println!("Заметок не найдено");
        return;
    }
    for note in notes {
        println!("[{}] {} ({})", note.id, note.title, created_date(note.created_at));
        println!("    {}", note.content);
        if !note.tags.is_empty() {
            println!("    #{}", note.tags.join(" #"));
        }
    }
}

pub fn settings(settings: &Settings) {
    let theme = match settings.theme {
        Theme::Light => "светлая",
        Theme::Dark => "тёмная",
    };
    println!("Имя: {}", settings.username);
    println!("Тема: {theme}");
}

pub fn playlist(reference: &str) {
    if reference.is_empty() {
        println!("Плейлист не сохранён");
    } else {
        println!("Spotify плейлист сохранён: {reference}");
    }
}

pub fn choices(prompt: &str, options: &[&str]) {
    println!("{prompt}");
    for option in options {
        println!("  - {option}");
    }
}

pub fn advice(advice: &AdviceEntry) {
    println!("💡 {} ({})", advice.text, advice.category);
}

fn created_date(epoch_ms: i64) -> String {
    Local
        .timestamp_millis_opt(epoch_ms)
        .single()
        .map(|at| at.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}
