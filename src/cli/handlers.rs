use std::io::{self, Read};

use crate::config::StoreConfig;
use crate::editor::NoteDraft;
use crate::entity::Note;
use crate::error::{NoteError, Result};
use crate::search::NoteQuery;
use crate::storage::NoteStore;
use crate::theme::{tint_by_name, TINT_CHOICES};

const PREVIEW_CHARS: usize = 60;

pub struct NewArgs {
    pub title: String,
    pub content: Option<String>,
    pub stdin: bool,
    pub color: Option<String>,
    pub favorite: bool,
    pub json: bool,
}

pub struct EditArgs {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub stdin: bool,
    pub color: Option<String>,
    pub json: bool,
}

/// Length of the id prefix printed next to each note.
const SHORT_ID_LEN: usize = 7;

/// A note found from a command-line id.
struct ResolvedNote {
    index: usize,
    note: Note,
    /// Whether `index` came from a list position rather than a UUID prefix
    by_position: bool,
}

/// Find a note by 1-based list position or UUID prefix.
///
/// Ids as long as a printed short id are matched as UUID prefixes first, so
/// an all-digit short id still finds its note. Shorter numbers are list
/// positions and fall back to a prefix match when no such position exists.
fn resolve_note(store: &NoteStore, id: &str) -> Result<ResolvedNote> {
    let id = id.trim();
    if id.is_empty() {
        return Err(NoteError::EmptyId);
    }

    let by_position = || {
        let index = id.parse::<usize>().ok()?.checked_sub(1)?;
        store.notes().get(index).map(|note| ResolvedNote {
            index,
            note: note.clone(),
            by_position: true,
        })
    };

    if id.len() < SHORT_ID_LEN {
        if let Some(resolved) = by_position() {
            return Ok(resolved);
        }
    }

    let prefix = id.to_lowercase();
    let mut matches = store
        .notes()
        .iter()
        .enumerate()
        .filter(|(_, n)| n.id.to_string().starts_with(&prefix));

    match (matches.next(), matches.next()) {
        (Some((index, note)), None) => Ok(ResolvedNote {
            index,
            note: note.clone(),
            by_position: false,
        }),
        (Some(_), Some(_)) => Err(NoteError::AmbiguousId(id.to_string())),
        (None, _) => by_position().ok_or_else(|| NoteError::NoteNotFound(id.to_string())),
    }
}

/// Surface a failed write from the last mutation.
fn check_saved(store: &mut NoteStore) -> Result<()> {
    match store.take_persist_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Color names map to their hex value; anything else is stored as given.
fn resolve_color(color: String) -> String {
    tint_by_name(&color).map(str::to_string).unwrap_or(color)
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

fn short_id(note: &Note) -> String {
    note.id.to_string()[..SHORT_ID_LEN].to_string()
}

fn print_note_line(position: usize, note: &Note) {
    let star = if note.is_favorite { "*" } else { " " };
    println!(
        "  {:>3} ({}) {} {}",
        position,
        short_id(note),
        star,
        note.title
    );
    let preview = note.preview(PREVIEW_CHARS);
    println!(
        "        {}  [{}]",
        preview,
        note.date_modified.format("%Y-%m-%d %H:%M")
    );
}

fn print_notes(notes: &[Note], store: &NoteStore, json: bool, empty_message: &str) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(notes)?);
    } else if notes.is_empty() {
        println!("{}", empty_message);
    } else {
        for note in notes {
            // Positions always refer to the full list so they can be passed back
            let position = store
                .notes()
                .iter()
                .position(|n| n.id == note.id)
                .map(|i| i + 1)
                .unwrap_or(0);
            print_note_line(position, note);
        }
    }
    Ok(())
}

pub fn handle_new(config: &StoreConfig, args: NewArgs) -> Result<()> {
    let mut store = NoteStore::from_config(config);

    let content = if args.stdin {
        read_stdin()?
    } else {
        args.content.unwrap_or_default()
    };

    let mut draft = NoteDraft {
        title: args.title,
        content,
        is_favorite: args.favorite,
        ..NoteDraft::default()
    };
    if let Some(color) = args.color {
        draft.tint_color_hex = resolve_color(color);
    }

    let note = draft.save(&mut store)?;
    check_saved(&mut store)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Created note ({}) - {}", short_id(&note), note.title);
    }

    Ok(())
}

pub fn handle_list(config: &StoreConfig, favorites: bool, json: bool) -> Result<()> {
    let store = NoteStore::from_config(config);

    let notes = if favorites {
        store.favorites()
    } else {
        store.notes().to_vec()
    };

    let empty_message = if favorites {
        "No favorite notes."
    } else {
        "No notes yet."
    };
    print_notes(&notes, &store, json, empty_message)
}

pub fn handle_show(config: &StoreConfig, id: String, json: bool) -> Result<()> {
    let store = NoteStore::from_config(config);
    let note = resolve_note(&store, &id)?.note;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
        return Ok(());
    }

    let favorite = if note.is_favorite { " *" } else { "" };
    println!("{}{}", note.title, favorite);
    println!("  id:       {}", note.id);
    println!("  created:  {}", note.date_created.format("%Y-%m-%d %H:%M"));
    println!("  edited:   {}", note.date_modified.format("%Y-%m-%d %H:%M"));
    println!("  tint:     {} ({})", note.tint_color_hex, note.tint());
    if !note.content.is_empty() {
        println!();
        println!("{}", note.content);
    }

    Ok(())
}

pub fn handle_edit(config: &StoreConfig, args: EditArgs) -> Result<()> {
    let mut store = NoteStore::from_config(config);
    let note = resolve_note(&store, &args.id)?.note;

    let mut draft = NoteDraft::from_note(&note);
    if let Some(title) = args.title {
        draft.title = title;
    }
    if args.stdin {
        draft.content = read_stdin()?;
    } else if let Some(content) = args.content {
        draft.content = content;
    }
    if let Some(color) = args.color {
        draft.tint_color_hex = resolve_color(color);
    }

    let saved = draft.save(&mut store)?;
    check_saved(&mut store)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
    } else {
        println!("Updated note ({}) - {}", short_id(&saved), saved.title);
    }

    Ok(())
}

pub fn handle_favorite(config: &StoreConfig, id: String) -> Result<()> {
    let mut store = NoteStore::from_config(config);
    let note = resolve_note(&store, &id)?.note;

    store.toggle_favorite(&note);
    check_saved(&mut store)?;

    let state = if note.is_favorite {
        "Unfavorited"
    } else {
        "Favorited"
    };
    println!("{} note ({}) - {}", state, short_id(&note), note.title);

    Ok(())
}

pub fn handle_delete(config: &StoreConfig, id: String, force: bool) -> Result<()> {
    let mut store = NoteStore::from_config(config);
    let resolved = resolve_note(&store, &id)?;
    let note = resolved.note;

    // Confirm deletion unless --force is used
    if !force {
        eprintln!(
            "Delete note ({}) - {}? This cannot be undone. [y/N] ",
            short_id(&note),
            note.title
        );

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(NoteError::ConfirmationRequired);
        }
    }

    if resolved.by_position {
        store.delete_at_index(resolved.index)?;
    } else {
        store.delete_by_id(&note.id);
    }
    check_saved(&mut store)?;

    println!("Deleted note ({}) - {}", short_id(&note), note.title);
    Ok(())
}

pub fn handle_search(config: &StoreConfig, query: String, json: bool) -> Result<()> {
    let store = NoteStore::from_config(config);
    let results = NoteQuery::parse(&query).apply(&store);

    let empty_message = format!("No results found for '{}'.", query);
    if !json && !results.is_empty() {
        println!("Search results for '{}':\n", query);
    }
    print_notes(&results, &store, json, &empty_message)
}

pub fn handle_colors() -> Result<()> {
    for (name, hex) in TINT_CHOICES {
        println!("  {:<8} {}", name, hex);
    }
    Ok(())
}
