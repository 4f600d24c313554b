//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `inkwell_core` linkage without a host UI.
//! - Optionally export a stored note as SVG for quick inspection.
//! - Initialize core file logging before touching a database.
//!
//! Usage: `inkwell_cli [<db_path> [<note_id>]]`
//!
//! Logs go to `$INKWELL_LOG_DIR` (absolute path) or `<tmp>/inkwell/logs`.

use inkwell_core::db::open_db;
use inkwell_core::{
    default_log_level, init_logging, render_note_svg, KvNoteRepository, NoteService,
    SqliteKeyValueStore, SvgOptions, Theme,
};
use std::path::PathBuf;
use std::process::ExitCode;

const EXPORT_WIDTH: f64 = 400.0;
const EXPORT_HEIGHT: f64 = 600.0;
const LOG_DIR_ENV: &str = "INKWELL_LOG_DIR";

fn main() -> ExitCode {
    println!("inkwell_core ping={}", inkwell_core::ping());
    println!("inkwell_core version={}", inkwell_core::core_version());

    let mut args = std::env::args().skip(1);
    let Some(db_path) = args.next() else {
        return ExitCode::SUCCESS;
    };

    let log_dir = resolve_log_dir(std::env::var(LOG_DIR_ENV).ok());
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("warning: logging disabled: {err}");
    }

    match run(&db_path, args.next()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Log directory from the environment override, else the temp directory.
fn resolve_log_dir(override_dir: Option<String>) -> PathBuf {
    match override_dir {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir.trim()),
        _ => std::env::temp_dir().join("inkwell").join("logs"),
    }
}

fn run(db_path: &str, note_id: Option<String>) -> Result<(), String> {
    let conn = open_db(db_path).map_err(|err| err.to_string())?;
    let store = SqliteKeyValueStore::try_new(&conn).map_err(|err| err.to_string())?;
    let service = NoteService::new(KvNoteRepository::new(store));

    match note_id {
        None => {
            for note in service.list_notes() {
                println!(
                    "{}\t{}\t{}\tstrokes={}",
                    note.id,
                    note.updated_at.to_rfc3339(),
                    note.title,
                    note.strokes.len()
                );
            }
        }
        Some(id) => {
            let note = service
                .get_note(&id)
                .ok_or_else(|| format!("note not found: {id}"))?;
            let options = SvgOptions::full_size(EXPORT_WIDTH, EXPORT_HEIGHT, Theme::Light);
            println!("{}", render_note_svg(&note, &options));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::resolve_log_dir;
    use std::path::PathBuf;

    #[test]
    fn log_dir_prefers_override() {
        assert_eq!(
            resolve_log_dir(Some(" /var/log/inkwell ".to_string())),
            PathBuf::from("/var/log/inkwell")
        );
    }

    #[test]
    fn log_dir_falls_back_to_absolute_temp_path() {
        for input in [None, Some("   ".to_string())] {
            let dir = resolve_log_dir(input);
            assert!(dir.is_absolute());
            assert!(dir.ends_with("inkwell/logs"));
        }
    }
}
