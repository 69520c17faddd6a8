//! Tabular presentation of a train collection.
//!
//! This is the only place the structured decoder output turns into
//! locale text: duration labels, arrival-day labels, endpoint markers,
//! and the fixed column headers all live here.

use crate::domain::{DayOffset, SeatClass, TravelTime};
use crate::query::TrainCollection;
use crate::tickets::{StationCall, TrainEntry};

/// Fixed column headers, one per output column.
pub const HEADERS: [&str; 15] = [
    "车次", "车站", "时间", "历时", "商务", "一等", "二等", "高软", "软卧", "动卧", "硬卧",
    "软座", "硬座", "无座", "其他",
];

/// Placeholder for a seat class with no reported availability.
const NOT_AVAILABLE: &str = "--";

/// Time-column text for a suspended service.
const SUSPENDED: &str = "停运";

/// Render a collection as a formatted table.
///
/// A collection with zero raw rows renders as a single "no result"
/// indicator row instead of the normal header set.
pub fn render(collection: &TrainCollection) -> String {
    if collection.is_empty() {
        return render_table(&["Sorry,"], &[vec!["No result.".to_string()]]);
    }

    let rows: Vec<Vec<String>> = collection.trains().map(|entry| entry_cells(&entry)).collect();
    render_table(&HEADERS, &rows)
}

/// Build the cells of one table row.
fn entry_cells(entry: &TrainEntry) -> Vec<String> {
    let mut cells = Vec::with_capacity(HEADERS.len());

    cells.push(entry.train_number.clone());
    cells.push(format!(
        "{}\n{}",
        station_cell(&entry.origin, Side::Origin),
        station_cell(&entry.destination, Side::Destination)
    ));

    match &entry.schedule {
        Some(schedule) => {
            cells.push(format!("{}\n{}", schedule.departure, schedule.arrival));
            cells.push(format!(
                "{}\n{}到达",
                duration_label(schedule.duration),
                day_label(schedule.arrival_day)
            ));
        }
        None => {
            cells.push(SUSPENDED.to_string());
            cells.push(NOT_AVAILABLE.to_string());
        }
    }

    for class in SeatClass::ALL {
        cells.push(
            entry
                .availability(class)
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
        );
    }

    cells
}

enum Side {
    Origin,
    Destination,
}

fn station_cell(call: &StationCall, side: Side) -> String {
    let marker = match (&side, call.is_endpoint) {
        (Side::Origin, true) => "[始]",
        (Side::Destination, true) => "[终]",
        (_, false) => "[过]",
    };
    format!("{marker}{}", call.name)
}

/// Format a duration per the upstream display convention: zero hours
/// show only minutes, single-digit hours drop the leading zero, and
/// minutes stay zero-padded.
fn duration_label(duration: TravelTime) -> String {
    if duration.hours == 0 {
        format!("{:02}分钟", duration.minutes)
    } else {
        format!("{}小时{:02}分钟", duration.hours, duration.minutes)
    }
}

fn day_label(day: DayOffset) -> &'static str {
    match day {
        DayOffset::SameDay => "当日",
        DayOffset::NextDay => "次日",
        DayOffset::DayAfterNext => "两日",
        DayOffset::ThirdDay => "三日",
    }
}

/// Render headers and rows as an ASCII box table.
///
/// Cells may span multiple lines; every cell of a row is padded to the
/// row's tallest cell.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();

    // Column width = widest line in the header or any cell
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(columns) {
            let cell_width = cell.lines().map(display_width).max().unwrap_or(0);
            widths[idx] = widths[idx].max(cell_width);
        }
    }

    let mut out = String::new();
    let separator = separator_line(&widths);

    out.push_str(&separator);
    push_line(&mut out, headers.iter().map(|h| vec![*h]).collect(), &widths);
    out.push_str(&separator);
    for row in rows {
        let cells: Vec<Vec<&str>> = row.iter().map(|cell| cell.lines().collect()).collect();
        push_line(&mut out, cells, &widths);
    }
    out.push_str(&separator);

    out
}

fn separator_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for &width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

/// Emit one logical row, expanded to its tallest cell's line count.
fn push_line(out: &mut String, cells: Vec<Vec<&str>>, widths: &[usize]) {
    let height = cells.iter().map(Vec::len).max().unwrap_or(1);
    for line_idx in 0..height {
        out.push('|');
        for (col, lines) in cells.iter().enumerate() {
            let text = lines.get(line_idx).copied().unwrap_or("");
            let padding = widths[col].saturating_sub(display_width(text));
            out.push(' ');
            out.push_str(text);
            out.push_str(&" ".repeat(padding));
            out.push_str(" |");
        }
        out.push('\n');
    }
}

/// Terminal display width of a string. ASCII counts one column; the
/// CJK characters in this data render two columns wide.
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}
