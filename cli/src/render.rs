//! Text rendering of tables and charts.

use comfy_table::{Cell, CellAlignment, Table};
use pune_estimator::booking::{Booking, Bus};
use pune_estimator::histogram::Histogram;
use pune_estimator::LocationPrice;
use std::fmt::Write;

const BAR_WIDTH: usize = 40;

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.min(BAR_WIDTH))
}

/// One line per bin; the bin holding `predicted` is marked.
pub fn histogram(histogram: &Histogram, predicted: f64) -> String {
    let max = histogram.counts().iter().copied().max().unwrap_or(0) as f64;
    let marked = histogram.bin_of(predicted);

    let mut out = String::new();
    for (i, ((lower, upper), &count)) in histogram.edges().zip(histogram.counts()).enumerate() {
        let marker = if marked == Some(i) { "  ◀ predicted" } else { "" };
        let _ = writeln!(
            out,
            "{:>9.2} - {:>9.2} | {:<width$} {}{}",
            lower,
            upper,
            bar(count as f64, max),
            count,
            marker,
            width = BAR_WIDTH
        );
    }
    if marked.is_none() {
        let _ = writeln!(
            out,
            "Predicted ₹ {:.2} Lakhs lies outside the recorded range",
            predicted
        );
    }
    out
}

pub fn comparison_table(rows: &[LocationPrice]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Location", "Predicted Price (Lakhs)"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.site_location),
            Cell::new(format!("{:.2}", row.price)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn bar_chart(rows: &[LocationPrice]) -> String {
    let max = rows.iter().map(|r| r.price).fold(0.0, f64::max);
    let label_width = rows
        .iter()
        .map(|r| r.site_location.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{:<label_width$} | {} {:.2}",
            row.site_location,
            bar(row.price, max),
            row.price,
        );
    }
    out
}

pub fn bus_table(buses: &[&Bus]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Bus ID",
        "Source",
        "Destination",
        "Departure",
        "Arrival",
        "Price",
    ]);
    for bus in buses {
        table.add_row(vec![
            Cell::new(&bus.id),
            Cell::new(&bus.source),
            Cell::new(&bus.destination),
            Cell::new(&bus.departure),
            Cell::new(&bus.arrival),
            Cell::new(bus.price).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn booking_table(bookings: &[Booking]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Bus ID", "Date", "Booking Time"]);
    for booking in bookings {
        table.add_row(vec![
            booking.name.clone(),
            booking.bus_id.clone(),
            booking.travel_date.format("%Y-%m-%d").to_string(),
            booking.booking_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }
    table
}
