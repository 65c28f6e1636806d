//! Styled terminal output for cf2go

use owo_colors::OwoColorize;

const COLUMN_SEPARATOR: &str = " │ ";

/// Print an error message with a red X
pub fn error(message: &str) {
    // Pastel coral/salmon: RGB(255, 160, 160)
    eprintln!(
        "{} {}",
        "✗".truecolor(255, 160, 160).bold(),
        message.bright_white()
    );
}

/// Print an info message with a blue info symbol
pub fn info(message: &str) {
    // Pastel sky blue: RGB(160, 200, 255)
    println!(
        "{} {}",
        "ℹ".truecolor(160, 200, 255).bold(),
        message.bright_white()
    );
}

/// Print a table with columns padded to their widest cell
pub fn table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = column_widths(headers, rows);

    // Softer pastel teal: RGB(120, 180, 195)
    let header = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w).truecolor(120, 180, 195).bold().to_string())
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR);
    println!("  {}", header);

    let rule_width = widths.iter().sum::<usize>()
        + COLUMN_SEPARATOR.chars().count() * widths.len().saturating_sub(1);
    // Brighter grey: RGB(160, 160, 160)
    println!("  {}", "─".repeat(rule_width).truecolor(160, 160, 160));

    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(v, w)| pad(v, *w).bright_white().to_string())
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR);
        println!("  {}", line);
    }
}

/// Display width of every column, measured on the unstyled text
fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }
    widths
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}
