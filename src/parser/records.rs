use crate::error::Error;

/// Pivoted quarterly data, ready for serialization: one column per output
/// field, one row per quarter.
#[derive(Debug, Clone)]
pub struct QuarterTable {
    /// `Quarter` followed by metric names in first-appearance order.
    pub columns: Vec<String>,
    /// One row per quarter, aligned with `columns`.
    pub rows: Vec<Vec<String>>,
}

/// Re-pivot the scanned table (metrics as rows, quarters as columns) into
/// one row per quarter, truncated to the first `limit` quarter columns.
///
/// Row 0 is the header: a label cell followed by quarter labels. Every
/// later row is one metric; rows with an empty first cell are ignored, and
/// a repeated metric name overwrites the earlier values while keeping its
/// original column position. Metric rows shorter than the header pad with
/// empty strings.
pub fn build_quarter_table(rows: &[Vec<String>], limit: usize) -> Result<QuarterTable, Error> {
    let Some(header) = rows.first() else {
        return Err(Error::EmptyTable);
    };
    if header.len() < 2 {
        return Err(Error::MalformedHeader);
    }
    let quarters = &header[1..];

    let mut metrics: Vec<(&String, &[String])> = Vec::new();
    for row in &rows[1..] {
        let Some((name, values)) = row.split_first() else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        match metrics.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = values,
            None => metrics.push((name, values)),
        }
    }

    let count = quarters.len().min(limit);
    if count == 0 || metrics.is_empty() {
        return Err(Error::NoData);
    }

    let mut columns = Vec::with_capacity(metrics.len() + 1);
    columns.push("Quarter".to_string());
    columns.extend(metrics.iter().map(|(name, _)| (*name).clone()));

    let rows = (0..count)
        .map(|idx| {
            let mut out = Vec::with_capacity(columns.len());
            out.push(quarters[idx].clone());
            out.extend(
                metrics
                    .iter()
                    .map(|(_, values)| values.get(idx).cloned().unwrap_or_default()),
            );
            out
        })
        .collect();

    Ok(QuarterTable { columns, rows })
}
