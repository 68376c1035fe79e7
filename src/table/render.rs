use std::io::{Result, Write};

/// Writes one line per row, fields separated by a tab. Tabs and newlines inside fields become spaces.
pub fn write_tsv(rows: &[Vec<String>], writer: &mut impl Write) -> Result<()> {
    for row in rows {
        let line = row
            .iter()
            .map(|field| field.replace(['\t', '\n', '\r'], " "))
            .collect::<Vec<_>>()
            .join("\t");
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Writes rows as left-aligned columns padded to the widest field.
pub fn write_aligned(rows: &[Vec<String>], writer: &mut impl Write) -> Result<()> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, field) in row.iter().enumerate() {
            widths[i] = widths[i].max(field.chars().count());
        }
    }

    for row in rows {
        let mut line = String::new();
        for (i, field) in row.iter().enumerate() {
            if i + 1 == row.len() {
                line.push_str(field);
            } else {
                line.push_str(&format!("{field:<width$}  ", width = widths[i]));
            }
        }
        writeln!(writer, "{}", line.trim_end())?;
    }
    Ok(())
}
