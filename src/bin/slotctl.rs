use std::io::{self, Write};

use log::info;

use ad_scheduler::models::AdRecord;
use ad_scheduler::render::{render_grid, render_profit, render_summary};
use ad_scheduler::scheduler::{ScheduleSummary, SlotScheduler};
use ad_scheduler::store::AdStore;
use ad_scheduler::validation::validate_input;

fn print_help() {
    println!(
        "Commands:\n  help                                    Show this help\n  list                                    Show stored ads\n  add <name> <category> <duration> <profit> <deadline>\n                                          Add an ad (single-word name/category)\n  edit <id> <name> <category> <duration> <profit> <deadline>\n                                          Replace the ad with the given id\n  delete <id>                             Delete an ad\n  clear                                   Delete all ads\n  run <days> <slots_per_day>              Schedule and show grid + summary\n  quit|exit                               Exit"
    );
}

fn render_ad_table(ads: &[AdRecord]) -> String {
    let headers = ["id", "name", "category", "duration", "profit", "deadline"];
    let rows: Vec<[String; 6]> = ads
        .iter()
        .map(|ad| {
            [
                ad.id.to_string(),
                ad.name.clone(),
                ad.category.clone(),
                ad.duration.to_string(),
                format!("{:.2}", ad.profit),
                ad.deadline.to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(w + 2));
        sep.push('+');
    }

    let render_row = |cells: &[&str], widths: &[usize]| {
        let mut line = String::from("|");
        for (i, cell) in cells.iter().enumerate() {
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(widths[i] - cell.len()));
            line.push_str(" |");
        }
        line
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(&headers, &widths));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&render_row(&cells, &widths));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

/// Parses the five ad fields shared by `add` and `edit`.
fn parse_ad_fields<'a>(mut parts: impl Iterator<Item = &'a str>) -> Option<AdRecord> {
    let name = parts.next()?;
    let category = parts.next()?;
    let duration: i64 = parts.next()?.parse().ok()?;
    let profit: f64 = parts.next()?.parse().ok()?;
    let deadline: usize = parts.next()?.parse().ok()?;
    Some(
        AdRecord::new(0, name)
            .with_category(category)
            .with_duration(duration)
            .with_profit(profit)
            .with_deadline(deadline),
    )
}

fn run_scheduler(store: &AdStore, total_days: usize, slots_per_day: usize) {
    let ads = match store.load() {
        Ok(ads) => ads,
        Err(e) => {
            println!("Error loading ads: {e}");
            return;
        }
    };

    if let Err(errors) = validate_input(&ads, total_days, slots_per_day) {
        println!("Input is not schedulable:");
        for err in errors {
            println!("  - {}", err.message);
        }
        return;
    }

    info!(
        "scheduling {} ads on a {}x{} grid",
        ads.len(),
        total_days,
        slots_per_day
    );
    let result = SlotScheduler::new().schedule(&ads, total_days, slots_per_day);
    let summary = ScheduleSummary::calculate(&result, &ads);

    println!("{}", render_grid(&result.grid));
    println!("{}\n", render_profit(&result));
    println!("{}", render_summary(&summary));
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "ads.json".into());
    let store = AdStore::open(&path);
    println!("Ad slot scheduler - store: {path} - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "list" => match store.load() {
                Ok(ads) => print!("{}", render_ad_table(&ads)),
                Err(e) => println!("Error: {e}"),
            },
            "add" => match parse_ad_fields(parts) {
                Some(ad) => match store.add(ad) {
                    Ok(added) => println!("Added ad id={}", added.id),
                    Err(e) => println!("Error: {e}"),
                },
                None => println!("Usage: add <name> <category> <duration> <profit> <deadline>"),
            },
            "edit" => {
                let id = parts.next().and_then(|s| s.parse::<u64>().ok());
                match (id, parse_ad_fields(parts)) {
                    (Some(id), Some(mut ad)) => {
                        ad.id = id;
                        match store.update(ad) {
                            Ok(()) => println!("Updated ad {id}"),
                            Err(e) => println!("Error: {e}"),
                        }
                    }
                    _ => println!(
                        "Usage: edit <id> <name> <category> <duration> <profit> <deadline>"
                    ),
                }
            }
            "delete" => match parts.next().and_then(|s| s.parse::<u64>().ok()) {
                Some(id) => match store.delete(id) {
                    Ok(()) => println!("Deleted ad {id}"),
                    Err(e) => println!("Error: {e}"),
                },
                None => println!("Usage: delete <id>"),
            },
            "clear" => match store.clear() {
                Ok(()) => println!("All ads cleared."),
                Err(e) => println!("Error: {e}"),
            },
            "run" => {
                let days = parts.next().and_then(|s| s.parse::<usize>().ok());
                let slots = parts.next().and_then(|s| s.parse::<usize>().ok());
                match (days, slots) {
                    (Some(days), Some(slots)) => run_scheduler(&store, days, slots),
                    _ => println!("Usage: run <days> <slots_per_day>"),
                }
            }
            _ => println!("Unknown command. Type 'help'."),
        }
    }
}
