use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const OP_TARGET_MAX: usize = 40;

/// ANSI colour per logged operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "import" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|r| r.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for r in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(r.date);

            let target = if r.target.is_empty() {
                String::new()
            } else {
                format!(" ({})", r.target)
            };
            let visible = truncate(&format!("{}{}", r.operation, target), OP_TARGET_MAX);

            // colour only the operation word; pad on the visible width
            let padding = " ".repeat(OP_TARGET_MAX.saturating_sub(visible.width()));
            let (op, rest) = visible.split_at(r.operation.len().min(visible.len()));
            let colored = format!("{}{}", color_for_operation(&r.operation).paint(op), rest);

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                r.id,
                date,
                colored,
                padding,
                r.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
