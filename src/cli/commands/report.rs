use crate::cli::commands::list::select;
use crate::cli::commands::open_repo;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{Report, build_report};
use crate::errors::AppResult;
use crate::repository::EntryRepository;
use crate::ui::messages::{header, info, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { window, json } = cmd {
        let repo = open_repo(cfg)?;
        let all = repo.list_all()?;

        if all.is_empty() {
            info("No data available for analysis.");
            return Ok(());
        }

        let (entries, start, end) = select(&all, window)?;

        if entries.is_empty() {
            warning("No data found for selected date range.");
            return Ok(());
        }

        let report = build_report(&entries);

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report, &start, &end);
        }
    }

    Ok(())
}

fn yes_no(v: bool) -> &'static str {
    if v { "Yes" } else { "No" }
}

fn print_report(report: &Report, start: &str, end: &str) {
    println!("Checkbox summary from {} to {} ({} entries)\n", start, end, report.entries);

    header("Checkbox rate by person");
    for person in &report.per_person {
        println!("\n{} ({} entries)", person.name, person.total);

        let mut table = Table::new(["FIELD", "VALUE", "COUNT"]);
        for field in &person.fields {
            for row in &field.rows {
                table.add_row(vec![
                    field.label.to_string(),
                    yes_no(row.value).to_string(),
                    row.count.to_string(),
                ]);
            }
        }
        print!("{}", table.render());
    }

    println!();
    header("Overall 'Yes' count by person per checkbox");
    for totals in &report.overall {
        println!("\n{}", totals.label);

        let mut table = Table::new(["NAME", "COUNT"]);
        for row in &totals.rows {
            table.add_row(vec![row.name.clone(), row.count.to_string()]);
        }
        print!("{}", table.render());
    }
}
