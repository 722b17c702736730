use std::io::{self, Write};

use bytehist::ByteHistogram;
use clap::ValueEnum;

/// How the byte column renders each value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ByteFormat {
    /// Plain decimal, e.g. `228`
    #[value(name = "d")]
    Decimal,
    /// Zero-padded hexadecimal, e.g. `e4`
    #[value(name = "x")]
    Hexadecimal,
    /// Zero-padded binary, e.g. `11100100`
    #[value(name = "b")]
    Binary,
    /// Quoted character with escapes, e.g. `'a'` or `'\0'`
    #[value(name = "c")]
    Character,
}

/// Row ordering for the table body.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Lowest count first
    #[value(name = "asc")]
    Ascending,
    /// Highest count first
    #[value(name = "desc")]
    Descending,
}

const FULL_GLYPH: char = '\u{25a0}';
const PARTIAL_GLYPH: char = '\u{25ae}';

/// Column layout for the table. Widths depend only on the byte format, so the
/// whole layout is derived up front and passed around as a value.
pub struct Columns {
    format: ByteFormat,
    byte: usize,
    count: usize,
    rate: usize,
    sum: usize,
    hist: usize,
}

impl Columns {
    pub fn new(format: ByteFormat) -> Self {
        let byte = match format {
            ByteFormat::Decimal | ByteFormat::Hexadecimal => 6,
            ByteFormat::Binary | ByteFormat::Character => 10,
        };

        Self {
            format,
            byte,
            count: 15,
            rate: 6,
            sum: 6,
            hist: 32,
        }
    }

    fn bar_span(&self) -> usize {
        self.hist - 2
    }

    fn table_width(&self) -> usize {
        self.byte + self.count + self.rate + self.sum + self.hist + 1
    }

    fn render_byte(&self, value: u8) -> String {
        match self.format {
            ByteFormat::Decimal => format!("{value}"),
            ByteFormat::Hexadecimal => format!("{value:02x}"),
            ByteFormat::Binary => format!("{value:08b}"),
            ByteFormat::Character => format!("{:?}", value as char),
        }
    }
}

/// Write the full report: summary block, table header, and one row per byte
/// value that occurred at least once.
pub fn render<W: Write>(
    w: &mut W,
    name: &str,
    histogram: &ByteHistogram,
    format: ByteFormat,
    sort: Option<SortOrder>,
) -> io::Result<()> {
    let (values, counts) = match sort {
        None => histogram.byte_list(),
        Some(SortOrder::Ascending) => histogram.sorted_byte_list(true),
        Some(SortOrder::Descending) => histogram.sorted_byte_list(false),
    };

    let columns = Columns::new(format);

    write_summary(w, name, histogram.total(), values.len())?;
    write_header(w, &columns)?;
    write_body(w, &columns, &values, &counts, histogram.total())?;

    Ok(())
}

fn write_summary<W: Write>(w: &mut W, name: &str, total: u64, distinct: usize) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{:<20}{}", "File name:", name)?;
    writeln!(w, "{:<20}{}", "File size:", size_cell(total))?;
    writeln!(w, "{:<20}{}", "Different bytes:", distinct)?;
    writeln!(w)
}

fn write_header<W: Write>(w: &mut W, columns: &Columns) -> io::Result<()> {
    write!(w, "{:>width$}", "byte", width = columns.byte)?;
    write!(w, "{:>width$}", "count", width = columns.count)?;
    write!(w, "{:>width$}", "rate", width = columns.rate)?;
    write!(w, "{:>width$}", "sum", width = columns.sum)?;
    writeln!(w, "  hist")?;
    writeln!(w, "{}", "=".repeat(columns.table_width()))
}

fn write_body<W: Write>(
    w: &mut W,
    columns: &Columns,
    values: &[u8],
    counts: &[u64],
    total: u64,
) -> io::Result<()> {
    let max = counts.iter().copied().max().unwrap_or(0);
    let min = counts.iter().copied().min().unwrap_or(0);

    let mut cumulative = 0;

    for (value, count) in values.iter().zip(counts) {
        cumulative += count;

        let rate = *count as f64 / total as f64;
        let sum = cumulative as f64 / total as f64;

        write!(w, "{:>width$}", columns.render_byte(*value), width = columns.byte)?;
        write!(w, "{:>width$}", count, width = columns.count)?;
        write!(w, "{:>width$.2}", rate, width = columns.rate)?;
        write!(w, "{:>width$.2}", sum, width = columns.sum)?;
        writeln!(w, "  {}", bar(*count, min, max, columns.bar_span()))?;
    }

    Ok(())
}

/// Proportional bar for one row. Counts are normalized between the smallest
/// and largest counts in the table; when all counts are equal every bar is
/// full width. A partial-width glyph marks a fractional remainder.
fn bar(count: u64, min: u64, max: u64, span: usize) -> String {
    let norm = if max > min {
        (count - min) as f64 / (max - min) as f64
    } else {
        1.0
    };

    let cells = norm * span as f64;

    let mut bar: String = std::iter::repeat(FULL_GLYPH).take(cells as usize).collect();
    if cells.fract() > 0.1 {
        bar.push(PARTIAL_GLYPH);
    }

    bar
}

fn size_cell(total: u64) -> String {
    if total < 1024 {
        format!("{total}")
    } else {
        format!("{total} ({})", human_size(total))
    }
}

/// Human-readable byte size with binary units and one decimal.
fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}
