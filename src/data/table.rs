use std::io::{self, BufRead};

use super::classify::SamplePool;
use super::dialect::{sniff, Dialect};
use super::model::{Graph, Series};
use super::numeric::coerce;
use super::tokenizer::fields;

// ---------------------------------------------------------------------------
// ParsedTable – the result of reading one file
// ---------------------------------------------------------------------------

/// One file's graph together with what the model needs to fold it in.
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub graph: Graph,
    pub dialect: Dialect,
    /// Valid y samples of every series.
    pub samples: SamplePool,
}

// ---------------------------------------------------------------------------
// TableBuilder – streams lines into a Graph
// ---------------------------------------------------------------------------

/// Incremental builder for one [`Graph`].
///
/// The first line fixes the dialect and the column count. Every data line
/// then adds exactly one x value and one value per series; short lines are
/// padded with missing values and surplus fields are dropped.
#[derive(Debug)]
pub struct TableBuilder {
    graph: Graph,
    dialect: Dialect,
    samples: SamplePool,
}

impl TableBuilder {
    /// Sniff `first_line` and lay out the columns. A header line becomes the
    /// axis and series labels; anything else is the first data row.
    pub fn new(name: impl Into<String>, first_line: &str) -> Self {
        let dialect = sniff(first_line);
        let mut graph = Graph::new(name);

        let mut columns = fields(first_line, dialect.separator);
        if dialect.has_header {
            graph.x_name = columns.next().map(str::to_owned);
            graph.series = columns
                .map(|label| Series {
                    name: Some(label.to_owned()),
                    ..Default::default()
                })
                .collect();
        } else {
            let series_count = columns.count().saturating_sub(1);
            graph.series = vec![Series::default(); series_count];
        }

        let mut builder = Self {
            graph,
            dialect,
            samples: SamplePool::default(),
        };
        if !dialect.has_header {
            builder.push_line(first_line);
        }
        builder
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Append one data row.
    pub fn push_line(&mut self, line: &str) {
        let mut cells = fields(line, self.dialect.separator).map(coerce);

        self.graph
            .x_values
            .push(cells.next().flatten().unwrap_or(f64::NAN));

        for series in &mut self.graph.series {
            match cells.next().flatten() {
                Some(value) => {
                    series.values.push(value);
                    series.valid_count += 1;
                    self.samples.push(value);
                }
                None => series.values.push(f64::NAN),
            }
        }
    }

    pub fn finish(self) -> ParsedTable {
        ParsedTable {
            graph: self.graph,
            dialect: self.dialect,
            samples: self.samples,
        }
    }
}

/// Read a whole table from `reader`. Invalid UTF-8 is replaced, not rejected;
/// only I/O failures are errors.
pub fn read_table<R: BufRead>(name: &str, mut reader: R) -> io::Result<ParsedTable> {
    let mut buf = Vec::new();

    let Some(first_line) = next_line(&mut reader, &mut buf)? else {
        log::info!("{name}: empty file");
        return Ok(ParsedTable {
            graph: Graph::new(name),
            dialect: sniff(""),
            samples: SamplePool::default(),
        });
    };
    let mut builder = TableBuilder::new(name, &first_line);

    while let Some(line) = next_line(&mut reader, &mut buf)? {
        builder.push_line(&line);
    }

    let table = builder.finish();
    log::info!(
        "{}: {} separator, {}, {} series, {} rows",
        name,
        table.dialect.separator,
        if table.dialect.has_header {
            "header"
        } else {
            "no header"
        },
        table.graph.series.len(),
        table.graph.len()
    );
    Ok(table)
}

fn next_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}
