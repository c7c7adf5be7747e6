//! CLI smoke entry point.
//!
//! # Responsibility
//! - Open a journal (data directory argument, or in memory) and print a summary.
//! - Start file logging under `<data_dir>/logs` when a directory is given.
//! - Keep output deterministic enough for quick local sanity checks.

use bujo_core::db::{open_db, open_db_in_memory};
use bujo_core::config::resolve_db_path;
use bujo_core::{core_version, default_log_level, init_logging, Journal, LogKind, SqliteKvRepository};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("bujo_core version={}", core_version());

    let data_dir = std::env::args().nth(1).map(std::path::PathBuf::from);
    if let Some(dir) = &data_dir {
        let log_dir = std::path::absolute(dir.join("logs"))
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_default();
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let db_path = data_dir.as_ref().map(resolve_db_path);
    let conn = match &db_path {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    };
    let conn = match conn {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("cannot open journal: {err}");
            return ExitCode::FAILURE;
        }
    };

    let journal = Journal::open(SqliteKvRepository::new(&conn));
    let storage = db_path
        .as_ref()
        .map_or_else(|| ":memory:".to_string(), |path| path.display().to_string());
    println!("storage={storage}");
    println!("profile={}", journal.profile().name);
    println!("active_tab={:?}", journal.active_tab());
    for kind in LogKind::ALL {
        println!("log.{kind:?}={}", journal.log(kind).len());
    }
    println!("habits={}", journal.habits().len());
    println!("balance={:.2}", journal.balance());
    println!("pomodoro={}", journal.pomodoro().display());
    ExitCode::SUCCESS
}
