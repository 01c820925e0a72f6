//! PassForge — a multilingual password generator with strength analysis
//! and local history.
//!
//! Console front-end: `generate` (default), `history`, `set`, `lang`.

use std::collections::HashMap;

use zeroize::Zeroize;

use passforge::app::App;
use passforge::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use passforge::platform;
use passforge::services::clipboard::{Clipboard, SystemClipboard};
use passforge::services::localization_engine::LocalizationEngineTrait;
use passforge::services::settings_engine::SettingsEngineTrait;
use passforge::types::history::HistoryEntry;
use passforge::types::strength::StrengthResult;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = platform::get_data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let db_path = data_dir.join("history.db");

    let mut app = App::new(&db_path.to_string_lossy())?;

    match args.first().map(String::as_str) {
        None | Some("generate") => {
            let copy = args.iter().any(|a| a == "--copy");
            cmd_generate(&mut app, copy)
        }
        Some("history") => match args.get(1).map(String::as_str) {
            None => cmd_history_list(&app),
            Some("clear") => cmd_history_clear(&mut app),
            Some("delete") => {
                let id = args
                    .get(2)
                    .ok_or("usage: passforge history delete <id>")?;
                cmd_history_delete(&mut app, id)
            }
            Some(other) => {
                usage();
                Err(format!("unknown history command: {}", other).into())
            }
        },
        Some("set") => {
            let key = args.get(1).ok_or("usage: passforge set <key> <value>")?;
            let value = args.get(2).ok_or("usage: passforge set <key> <value>")?;
            cmd_set(&mut app, key, value)
        }
        Some("lang") => {
            let code = args.get(1).ok_or("usage: passforge lang <code>")?;
            app.set_language(code)?;
            println!("{}", app.tr("settings.saved"));
            Ok(())
        }
        Some("help") | Some("--help") | Some("-h") => {
            usage();
            Ok(())
        }
        Some(other) => {
            usage();
            Err(format!("unknown command: {}", other).into())
        }
    }
}

fn usage() {
    println!("passforge {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("USAGE:");
    println!("  passforge [generate] [--copy]    generate a password (and copy it)");
    println!("  passforge history                list saved passwords");
    println!("  passforge history delete <id>    delete one saved password");
    println!("  passforge history clear          delete all saved passwords");
    println!("  passforge set <key> <value>      update a setting, e.g. generator.length 24");
    println!("  passforge lang <code>            switch language (en, ar, de, tr)");
}

fn cmd_generate(app: &mut App, copy: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (mut password, strength) = app.generate_password()?;

    if password.is_empty() {
        println!("{}", app.tr("result.placeholder"));
        return Ok(());
    }

    println!("{}", password);
    println!("{}", render_meter(&strength, &app.tr(&strength.label_key())));

    if copy {
        match SystemClipboard::new().copy(&password) {
            Ok(()) => println!("{}", app.tr("result.copied")),
            Err(e) => {
                let mut params = HashMap::new();
                params.insert("reason".to_string(), e.to_string());
                eprintln!(
                    "{}",
                    app.localization_engine.t("errors.clipboard", Some(&params))
                );
            }
        }
    }

    password.zeroize();
    Ok(())
}

/// Renders the strength meter as a 20-cell bar with the band percentage.
fn render_meter(strength: &StrengthResult, label: &str) -> String {
    let filled = (strength.score as usize * 20) / 100;
    let mut bar = String::with_capacity(20);
    for i in 0..20 {
        bar.push(if i < filled { '█' } else { '░' });
    }
    format!("[{}] {:>3}% {}", bar, strength.score, label)
}

fn cmd_history_list(app: &App) -> Result<(), Box<dyn std::error::Error>> {
    let history = HistoryManager::new(app.db.connection());
    let entries = history.list()?;

    if entries.is_empty() {
        println!("{}", app.tr("history.empty"));
        return Ok(());
    }

    for entry in &entries {
        print_entry(app, entry);
    }
    println!(
        "{}",
        app.localization_engine
            .plural("history.saved", entries.len() as u64, None)
    );
    Ok(())
}

fn print_entry(app: &App, entry: &HistoryEntry) {
    let tier_label = match entry.tier {
        Some(tier) => app.tr(&tier.label_key()),
        None => app.tr("strength.not_rated"),
    };
    println!(
        "{}  {}  {}  {}",
        entry.id,
        format_timestamp(entry.created_at),
        tier_label,
        entry.password
    );
}

fn cmd_history_delete(app: &mut App, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut history = HistoryManager::new(app.db.connection());
    history.delete_entry(id)?;
    println!("{}", app.tr("history.deleted"));
    Ok(())
}

fn cmd_history_clear(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    let mut history = HistoryManager::new(app.db.connection());
    history.clear_all()?;
    println!("{}", app.tr("history.cleared"));
    Ok(())
}

fn cmd_set(app: &mut App, key: &str, raw: &str) -> Result<(), Box<dyn std::error::Error>> {
    // Accept bare numbers and booleans; everything else is a string
    let value = serde_json::from_str::<serde_json::Value>(raw)
        .unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));

    app.settings_engine.set_value(key, value)?;
    println!("{}", app.tr("settings.saved"));
    Ok(())
}

/// Formats a UNIX timestamp as `YYYY-MM-DD HH:MM` (UTC).
fn format_timestamp(ts: i64) -> String {
    let seconds_of_day = ts.rem_euclid(86_400);
    let mut days = ts.div_euclid(86_400);

    // Civil-from-days (Gregorian), days since 1970-01-01
    days += 719_468;
    let era = days.div_euclid(146_097);
    let doe = days.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };

    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        year,
        month,
        day,
        seconds_of_day / 3600,
        (seconds_of_day % 3600) / 60
    )
}
