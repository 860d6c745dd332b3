//! PNG bar chart of the timing results.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::error::BenchError;
use crate::harness::TimingRecord;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;

const MARGIN: u32 = 60;
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([40, 40, 40]);
const BAR: Rgb<u8> = Rgb([66, 133, 244]);

/// Render the sorted records as a bar chart, one bar per strategy with
/// heights proportional to elapsed time, and save it as a PNG. Labels live in
/// the console table; the chart carries the shape of the ranking.
pub fn render(records: &[TimingRecord], path: &Path) -> Result<(), BenchError> {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);

    let plot_w = WIDTH - 2 * MARGIN;
    let plot_h = HEIGHT - 2 * MARGIN;
    let slowest = records.iter().map(|r| r.elapsed_ms).fold(0.0, f64::max);

    if !records.is_empty() && slowest > 0.0 {
        let slot = (plot_w / records.len() as u32).max(1);
        let bar_w = (slot * 3 / 4).max(1);

        for (i, record) in records.iter().enumerate() {
            let bar_h = ((record.elapsed_ms / slowest) * plot_h as f64).round() as u32;
            let bar_h = bar_h.clamp(1, plot_h);
            let x0 = MARGIN + i as u32 * slot + (slot - bar_w) / 2;
            let y0 = HEIGHT - MARGIN - bar_h;

            for x in x0..x0 + bar_w {
                for y in y0..HEIGHT - MARGIN {
                    img.put_pixel(x, y, BAR);
                }
            }
        }
    }

    for x in MARGIN..=WIDTH - MARGIN {
        img.put_pixel(x, HEIGHT - MARGIN, AXIS);
    }
    for y in MARGIN..=HEIGHT - MARGIN {
        img.put_pixel(MARGIN, y, AXIS);
    }

    img.save(path)?;
    Ok(())
}
