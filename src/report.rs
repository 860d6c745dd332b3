//! Ranked console table for the timing results.

use colored::Colorize;

use crate::harness::TimingRecord;

const BAR_WIDTH: usize = 40;

/// Print the records fastest first, each with a bar proportional to the
/// slowest run. The winner is highlighted.
pub fn print_table(records: &[TimingRecord]) {
    println!("\nExecution Times:");

    let slowest = records.iter().map(|r| r.elapsed_ms).fold(0.0, f64::max);
    let label_width = records.iter().map(|r| r.label.len()).max().unwrap_or(0);

    for (rank, record) in records.iter().enumerate() {
        let bar_len = if slowest > 0.0 {
            ((record.elapsed_ms / slowest) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "#".repeat(bar_len.max(1));
        let line = format!(
            "{:<label_width$}  {:>9.2} ms  {}",
            record.label, record.elapsed_ms, bar
        );

        if rank == 0 {
            println!("{}", line.green().bold());
        } else {
            println!("{line}");
        }
    }
}
