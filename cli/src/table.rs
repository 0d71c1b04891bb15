// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

pub trait TableStyle {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result;
}

pub struct Table<'a, S: TableStyle, T, C: TableColumn<T>> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S: TableStyle, T, C: TableColumn<T>> Table<'a, S, T, C> {
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S: TableStyle, T, C: TableColumn<T>> fmt::Display for Table<'_, S, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.write(f, self.columns, self.data)
    }
}

/// Whitespace separated, padded columns with optional colors.
#[derive(Debug, Clone)]
pub struct TableStyleBasic {
    separator: &'static str,
    padding: bool,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self {
            separator: " ",
            padding: true,
        }
    }
}

impl TableStyle for TableStyleBasic {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let table: Vec<Vec<Cow<'_, str>>> = data
            .iter()
            .map(|row| columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let widths = self
            .padding
            .then(|| get_column_max_width(columns.len(), &table));

        for (cells, row) in table.iter().zip(data) {
            for (j, (col, cell)) in columns.iter().zip(cells).enumerate() {
                let last = j + 1 == columns.len();
                let cell = match (&widths, col.padding_direction()) {
                    // last column does not need padding if it's left-aligned
                    (Some(_), PaddingDirection::Left) if last => cell.to_string(),
                    (Some(w), dir) => pad(cell, w[j], dir),
                    (None, _) => cell.to_string(),
                };

                match col.color(row) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }

                if last {
                    writeln!(f)?;
                } else {
                    write!(f, "{}", self.separator)?;
                }
            }
        }
        Ok(())
    }
}

/// One JSON object per row, keyed by column name.
#[derive(Debug, Clone)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> = data
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| {
                        let value = serde_json::Value::String(col.format(row).into_owned());
                        (col.name().into_owned(), value)
                    })
                    .collect()
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        writeln!(f, "{json}")
    }
}

fn pad(cell: &str, width: usize, direction: PaddingDirection) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}

fn get_column_max_width(len: usize, table: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
    let mut max_width = vec![0; len];
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            max_width[i] = max_width[i].max(cell.width());
        }
    }
    max_width
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Col(usize, PaddingDirection);

    impl TableColumn<(&'static str, &'static str)> for Col {
        fn name(&self) -> Cow<'_, str> {
            let name = if self.0 == 0 { "Left" } else { "Right" };
            name.into()
        }

        fn format<'a>(&self, data: &'a (&'static str, &'static str)) -> Cow<'a, str> {
            let value = if self.0 == 0 { data.0 } else { data.1 };
            value.into()
        }

        fn padding_direction(&self) -> PaddingDirection {
            self.1
        }
    }

    #[test]
    fn test_basic_pads_by_display_width() {
        let columns = [Col(0, PaddingDirection::Right), Col(1, PaddingDirection::Left)];
        let data = [("1", "漢字"), ("22", "ab")];
        let out = Table::new(TableStyleBasic::new(), &columns, &data).to_string();
        assert_eq!(out, " 1 漢字\n22 ab\n");
    }

    #[test]
    fn test_json_style() {
        let columns = [Col(0, PaddingDirection::Left), Col(1, PaddingDirection::Left)];
        let data = [("a\"b", "c")];
        let out = Table::new(TableStyleJson::new(), &columns, &data).to_string();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, serde_json::json!([{"Left": "a\"b", "Right": "c"}]));
    }

    #[test]
    fn test_empty_table() {
        let columns = [Col(0, PaddingDirection::Left)];
        let data: [(&str, &str); 0] = [];
        assert_eq!(
            Table::new(TableStyleBasic::new(), &columns, &data).to_string(),
            ""
        );
        assert_eq!(
            Table::new(TableStyleJson::new(), &columns, &data).to_string(),
            "[]\n"
        );
    }
}
