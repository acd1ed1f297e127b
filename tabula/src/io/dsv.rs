//! Reading of delimiter-separated value input
//!
//! This module provides [`DsvReader`], which parses DSV (delimiter-separated value) text
//! from any [`Read`] into a [`Table`].
//!
//! # Examples
//! ```
//! # use tabula::{io::dsv::DsvReader, datatypes::ColumnData};
//! let data = "\
//! city,population
//! Boston,654776
//! Dresden,554649
//! ";
//! let table = DsvReader::csv().read(data.as_bytes()).expect("input is well-formed");
//!
//! assert_eq!(table.column_names(), ["city", "population"]);
//! assert_eq!(
//!     table.column("population").ok(),
//!     Some(&ColumnData::from(vec![654776i64, 554649]))
//! );
//! ```

use std::io::Read;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::{
    datatypes::{ColumnData, Double, Value, ValueType},
    error::{Error, ReadingError},
    tabular::table::Table,
};

/// A reader object for reading [DSV](https://en.wikipedia.org/wiki/Delimiter-separated_values)
/// (delimiter separated values) input.
///
/// By default the reader will assume the following for the input:
/// - the first record holds the column names,
/// - double quotes are allowed for string escaping,
/// - the type of each column is inferred from its values.
#[derive(Debug, Clone)]
pub struct DsvReader {
    delimiter: u8,
    escape: Option<u8>,
    has_headers: bool,
    column_types: Option<Vec<ValueType>>,
}

impl DsvReader {
    /// Instantiate a [DsvReader] for CSV (comma separated values) input
    pub fn csv() -> Self {
        Self::dsv(b',')
    }

    /// Instantiate a [DsvReader] for TSV (tab separated values) input
    pub fn tsv() -> Self {
        Self::dsv(b'\t')
    }

    /// Instantiate a [DsvReader] for a given delimiter
    pub fn dsv(delimiter: u8) -> Self {
        Self {
            delimiter,
            escape: Some(b'\\'),
            has_headers: true,
            column_types: None,
        }
    }

    /// Set the escape character used inside quoted fields
    pub fn with_escape(mut self, escape: Option<u8>) -> Self {
        self.escape = escape;
        self
    }

    /// Set whether the first record holds the column names.
    /// Without headers, columns are named `V1`, `V2`, ...
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Use the given types for the columns instead of inferring them
    pub fn with_column_types(mut self, column_types: Vec<ValueType>) -> Self {
        self.column_types = Some(column_types);
        self
    }

    /// Wraps an arbitrary [`Read`] into a [`Reader`][csv::Reader] for csv
    fn reader<R>(&self, rdr: R) -> Reader<R>
    where
        R: Read,
    {
        ReaderBuilder::new()
            .delimiter(self.delimiter)
            .escape(self.escape)
            .has_headers(self.has_headers)
            .double_quote(true)
            .flexible(true)
            .from_reader(rdr)
    }

    /// Reads the whole input into a [`Table`].
    ///
    /// # Errors
    /// Returns a [`ReadingError`] if the input is malformed,
    /// and [`Error::InvalidArgument`] if a field cannot be read with an explicitly given column type.
    pub fn read<R>(&self, rdr: R) -> Result<Table, Error>
    where
        R: Read,
    {
        let mut reader = self.reader(rdr);

        let headers = if self.has_headers {
            let headers = reader.headers().map_err(ReadingError::from)?.clone();
            if headers.is_empty() {
                return Err(ReadingError::DsvMissingHeaders.into());
            }
            Some(headers)
        } else {
            None
        };

        let mut lines = Vec::new();
        let mut fields: Vec<Vec<String>> = headers
            .as_ref()
            .map(|headers| vec![Vec::new(); headers.len()])
            .unwrap_or_default();
        let mut expected = headers.as_ref().map(StringRecord::len);

        for record in reader.records() {
            let record = record.map_err(ReadingError::from)?;
            let line = record.position().map_or(0, |position| position.line());

            let width = *expected.get_or_insert_with(|| {
                fields = vec![Vec::new(); record.len()];
                record.len()
            });
            if record.len() != width {
                return Err(ReadingError::RaggedRow {
                    line,
                    expected: width,
                    found: record.len(),
                }
                .into());
            }

            for (column, field) in fields.iter_mut().zip(record.iter()) {
                column.push(field.to_string());
            }
            lines.push(line);
        }

        let names = match headers {
            Some(headers) => headers.iter().map(String::from).collect::<Vec<_>>(),
            None => (1..=fields.len()).map(|index| format!("V{index}")).collect(),
        };

        let types = match &self.column_types {
            Some(types) if types.len() != names.len() => {
                return Err(ReadingError::ColumnTypeCount {
                    given: types.len(),
                    columns: names.len(),
                }
                .into());
            }
            Some(types) => types.clone(),
            None => fields.iter().map(|column| infer_type(column)).collect(),
        };

        let columns = names
            .into_iter()
            .zip(fields)
            .zip(types)
            .map(|((name, column), value_type)| {
                log::trace!("reading column \"{name}\" as {value_type}");
                let data = parse_column(&name, &column, value_type, &lines)?;
                Ok((name, data))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let table = Table::new(columns)?;
        log::info!(
            "read {} rows into {} columns",
            table.nrows(),
            table.ncols()
        );

        Ok(table)
    }
}

fn parse_logical(field: &str) -> Option<bool> {
    match field {
        "TRUE" | "true" | "T" => Some(true),
        "FALSE" | "false" | "F" => Some(false),
        _ => None,
    }
}

fn parse_value(field: &str, value_type: ValueType) -> Option<Value> {
    match value_type {
        ValueType::Logical => parse_logical(field).map(Value::Logical),
        ValueType::Integer => field.trim().parse::<i64>().ok().map(Value::Integer),
        ValueType::Double => field
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(|value| Double::new(value).ok())
            .map(Value::Double),
        ValueType::Text => Some(Value::Text(field.to_string())),
    }
}

/// Narrowest type that can represent every field of a column
fn infer_type(fields: &[String]) -> ValueType {
    [ValueType::Logical, ValueType::Integer, ValueType::Double]
        .into_iter()
        .find(|&value_type| {
            fields
                .iter()
                .all(|field| parse_value(field, value_type).is_some())
        })
        .unwrap_or(ValueType::Text)
}

fn parse_column(
    name: &str,
    fields: &[String],
    value_type: ValueType,
    lines: &[u64],
) -> Result<ColumnData, Error> {
    let values = fields
        .iter()
        .zip(lines)
        .map(|(field, line)| {
            parse_value(field, value_type).ok_or_else(|| {
                Error::invalid_argument(format!(
                    "line {line}: cannot read \"{field}\" as {value_type} in column \"{name}\""
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut column = ColumnData::from_values(values);
    if column.is_empty() {
        column = ColumnData::new(value_type);
    }

    Ok(column)
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;
    use test_log::test;

    #[test]
    fn infers_column_types() {
        let data = "\
a,b,c,d
1,x,TRUE,1.5
2,y,F,2
";
        let table = DsvReader::csv()
            .read(data.as_bytes())
            .expect("input is well-formed");

        assert_eq!(table.column_names(), ["a", "b", "c", "d"]);
        assert_eq!(table.column("a").ok(), Some(&ColumnData::from(vec![1i64, 2])));
        assert_eq!(table.column("b").ok(), Some(&ColumnData::from(vec!["x", "y"])));
        assert_eq!(
            table.column("c").ok(),
            Some(&ColumnData::from(vec![true, false]))
        );
        assert_eq!(
            table.column("d").ok(),
            Some(&ColumnData::from(vec![
                Double::from_number(1.5),
                Double::from_number(2.0)
            ]))
        );
    }

    #[test]
    fn tsv_without_headers() {
        let data = "x\t\"quoted, text\"\ny\tplain\n";
        let table = DsvReader::tsv()
            .with_headers(false)
            .read(data.as_bytes())
            .expect("input is well-formed");

        assert_eq!(table.column_names(), ["V1", "V2"]);
        assert_eq!(
            table.column("V2").ok(),
            Some(&ColumnData::from(vec!["quoted, text", "plain"]))
        );
    }

    #[test]
    fn explicit_column_types() {
        let data = "id,score\n007,3\n";
        let table = DsvReader::csv()
            .with_column_types(vec![ValueType::Text, ValueType::Double])
            .read(data.as_bytes())
            .expect("fields fit the types");

        assert_eq!(table.column("id").ok(), Some(&ColumnData::from(vec!["007"])));
        assert_eq!(
            table.column("score").ok(),
            Some(&ColumnData::from(vec![Double::from_number(3.0)]))
        );

        let mismatch = DsvReader::csv()
            .with_column_types(vec![ValueType::Integer, ValueType::Integer])
            .read("a,b\n1,x\n".as_bytes());
        assert!(matches!(mismatch, Err(Error::InvalidArgument(_))));

        let count = DsvReader::csv()
            .with_column_types(vec![ValueType::Integer])
            .read("a,b\n1,2\n".as_bytes());
        assert!(matches!(
            count,
            Err(Error::ReadingError(ReadingError::ColumnTypeCount {
                given: 1,
                columns: 2
            }))
        ));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let result = DsvReader::csv().read("a,b\n1,2\n3\n".as_bytes());
        assert!(matches!(
            result,
            Err(Error::ReadingError(ReadingError::RaggedRow {
                line: 3,
                expected: 2,
                found: 1
            }))
        ));
    }

    #[test]
    fn header_only_input() {
        let table = DsvReader::csv()
            .read("a,b\n".as_bytes())
            .expect("headers are present");

        assert_eq!((table.nrows(), table.ncols()), (0, 2));
        assert!(matches!(
            DsvReader::csv().read("".as_bytes()),
            Err(Error::ReadingError(ReadingError::DsvMissingHeaders))
        ));
        assert!(matches!(
            DsvReader::csv().read("a,a\n1,2\n".as_bytes()),
            Err(Error::DuplicateColumnName(_))
        ));
    }

    #[quickcheck]
    #[cfg_attr(miri, ignore)]
    fn csv_quickchecked(i64_vec: Vec<i64>) -> bool {
        let data = std::iter::once("n".to_string())
            .chain(i64_vec.iter().map(i64::to_string))
            .collect::<Vec<_>>()
            .join("\n");
        log::debug!("input: {data:?}");

        let table = DsvReader::csv()
            .with_column_types(vec![ValueType::Integer])
            .read(data.as_bytes())
            .expect("integers are well-formed");
        table.column("n").ok() == Some(&ColumnData::from(i64_vec))
    }
}
