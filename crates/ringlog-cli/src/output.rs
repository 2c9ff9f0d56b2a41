//! Table and JSON output formatting

use chrono::{DateTime, Local};
use colored::Colorize;
use ringlog_core::FileLogConfig;
use ringlog_file::Slot;
use serde::Serialize;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Global flag for JSON output mode
static JSON_MODE: AtomicBool = AtomicBool::new(false);

/// Enable or disable JSON output mode
pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::SeqCst);
}

/// Check if JSON output mode is enabled
pub fn is_json_mode() -> bool {
    JSON_MODE.load(Ordering::SeqCst)
}

#[derive(Tabled)]
pub struct SlotRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "file")]
    pub path: String,
    #[tabled(rename = "state")]
    pub state: String,
    #[tabled(rename = "size")]
    pub size: String,
    #[tabled(rename = "modified")]
    pub modified: String,
}

/// JSON-friendly slot representation
#[derive(Serialize)]
pub struct SlotJson {
    pub index: usize,
    pub path: String,
    pub occupied: bool,
    pub size_bytes: Option<u64>,
    pub modified: Option<DateTime<Local>>,
}

impl SlotJson {
    fn new(index: usize, slot: &Slot) -> Self {
        match slot {
            Slot::Vacant(path) => SlotJson {
                index,
                path: path.display().to_string(),
                occupied: false,
                size_bytes: None,
                modified: None,
            },
            Slot::Occupied(file) => SlotJson {
                index,
                path: file.path().display().to_string(),
                occupied: true,
                size_bytes: Some(file.size()),
                modified: Some(file.modified().into()),
            },
        }
    }
}

impl SlotRow {
    fn new(index: usize, slot: &Slot, capacity: u64) -> Self {
        match slot {
            Slot::Vacant(path) => SlotRow {
                index,
                path: path.display().to_string(),
                state: "vacant".dimmed().to_string(),
                size: "-".to_string(),
                modified: "-".to_string(),
            },
            Slot::Occupied(file) => {
                let state = if file.size() >= capacity {
                    "full".yellow().to_string()
                } else {
                    "open".green().to_string()
                };
                let modified: DateTime<Local> = file.modified().into();
                SlotRow {
                    index,
                    path: file.path().display().to_string(),
                    state,
                    size: format_bytes(file.size()),
                    modified: modified.format("%Y-%m-%d %H:%M:%S").to_string(),
                }
            }
        }
    }
}

pub fn print_slots_table(config: &FileLogConfig, slots: &[Slot]) {
    if is_json_mode() {
        let json: Vec<SlotJson> = slots
            .iter()
            .enumerate()
            .map(|(i, slot)| SlotJson::new(i, slot))
            .collect();
        match serde_json::to_string_pretty(&json) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        }
        return;
    }

    if slots.is_empty() {
        print_info("Ring has no slots (file_count = 0)");
        return;
    }

    let rows: Vec<SlotRow> = slots
        .iter()
        .enumerate()
        .map(|(i, slot)| SlotRow::new(i, slot, config.file_size))
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(0)).with(Alignment::right()))
        .to_string();

    println!("{}", table);
    print_info(&config.to_string());
}

pub fn print_exported(path: &Path) {
    if is_json_mode() {
        let json = serde_json::json!({ "success": true, "path": path.display().to_string() });
        println!("{}", json);
    } else {
        print_success(&format!("Exported log to {}", path.display()));
    }
}

pub fn format_bytes(bytes: u64) -> String {
    if bytes >= 1_073_741_824 {
        format!("{:.1}G", bytes as f64 / 1_073_741_824.0)
    } else if bytes >= 1_048_576 {
        format!("{:.1}M", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.0}K", bytes as f64 / 1024.0)
    } else {
        format!("{}B", bytes)
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}
