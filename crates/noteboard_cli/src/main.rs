//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `noteboard_core` linkage with a deterministic probe.
//! - Ingest the files named on the command line and print the board.
//!
//! Set `NOTEBOARD_LOG_DIR` (absolute path) to enable file logging.

use log::warn;
use noteboard_core::{
    core_version, default_log_level, init_logging, FileMeta, NoteBoard, SortKey,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("NOTEBOARD_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("noteboard_core version={}", core_version());

    let mut board = NoteBoard::new();
    for path in std::env::args().skip(1) {
        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!("event=cli_ingest module=cli status=error error={err}");
                eprintln!("skipping `{path}`: {err}");
                continue;
            }
        };
        let name = std::path::Path::new(&path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        if let Err(err) = board.ingest_file(&FileMeta::new(name, metadata.len())) {
            eprintln!("failed to ingest `{path}`: {err}");
            return ExitCode::FAILURE;
        }
    }

    for note in board.visible_notes("", SortKey::Name) {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            note.created_date,
            note.file_type,
            note.size_label,
            board.resolve_color(&note.tag),
            note.name
        );
    }
    ExitCode::SUCCESS
}
