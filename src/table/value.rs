//! Typed cell values
//!
//! Display text is parsed leniently: a malformed number becomes zero and an
//! unknown column or missing cell becomes [`CellValue::Empty`], which orders
//! below everything else.

use std::cmp::Ordering;

use super::column::{Column, ValueKind};
use super::Row;

#[derive(Debug, Clone)]
pub enum CellValue {
    Empty,
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl CellValue {
    fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(v) => Some(*v as f64),
            CellValue::Decimal(v) => Some(*v),
            _ => None,
        }
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        use CellValue::*;

        match (self, other) {
            (Empty, Empty) => Ordering::Equal,
            (Empty, _) => Ordering::Less,
            (_, Empty) => Ordering::Greater,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            (Text(_), _) => Ordering::Greater,
            (_, Text(_)) => Ordering::Less,
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                _ => Ordering::Equal,
            },
        }
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellValue {}

/// Sort key of `row` for the column named `column`
pub fn cell_value(row: &Row, column: &str) -> CellValue {
    let Some(column) = Column::from_name(column) else {
        return CellValue::Empty;
    };
    match row.cell(column.cell_index()) {
        Some(text) => parse_cell(text, column.kind()),
        None => CellValue::Empty,
    }
}

pub fn parse_cell(text: &str, kind: ValueKind) -> CellValue {
    let text = text.trim();
    match kind {
        ValueKind::Text => CellValue::Text(text.to_lowercase()),
        ValueKind::Count => CellValue::Integer(leading_integer(&text.replace(',', ""))),
        ValueKind::Percent => CellValue::Decimal(leading_decimal(&text.replacen('%', "", 1))),
        ValueKind::Currency => {
            CellValue::Decimal(leading_decimal(&text.replacen('$', "", 1).replace(',', "")))
        }
    }
}

/// Integer from the leading digits of `text`; 0 when there are none
pub fn leading_integer(text: &str) -> i64 {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add((b - b'0') as i64)
        });

    if negative {
        -value
    } else {
        value
    }
}

/// Decimal from the longest numeric prefix of `text`; 0 when there is none
pub fn leading_decimal(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    match s[..end].parse::<f64>() {
        Ok(v) if v.is_nan() || v == 0.0 => 0.0,
        Ok(v) => v,
        Err(_) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        Row::new(cells.iter().map(|c| c.to_string()).collect())
    }

    fn sample_row() -> Row {
        row(&[
            "",
            "  Running Shoes ",
            "Phrase",
            "None",
            "Spring Sale",
            "Footwear",
            "1,234",
            "87",
            "7.05%",
            "$1.42",
            "$1,234.50",
        ])
    }

    #[test]
    fn test_count_strips_separators() {
        assert_eq!(cell_value(&sample_row(), "impressions"), CellValue::Integer(1234));
        assert_eq!(cell_value(&sample_row(), "interactions"), CellValue::Integer(87));
    }

    #[test]
    fn test_count_defaults_to_zero() {
        assert_eq!(parse_cell("", ValueKind::Count), CellValue::Integer(0));
        assert_eq!(parse_cell("n/a", ValueKind::Count), CellValue::Integer(0));
        assert_eq!(parse_cell("12abc", ValueKind::Count), CellValue::Integer(12));
        assert_eq!(parse_cell("3.9", ValueKind::Count), CellValue::Integer(3));
    }

    #[test]
    fn test_currency() {
        assert_eq!(cell_value(&sample_row(), "cost"), CellValue::Decimal(1234.50));
        assert_eq!(cell_value(&sample_row(), "avg-cost"), CellValue::Decimal(1.42));
        assert_eq!(parse_cell("—", ValueKind::Currency), CellValue::Decimal(0.0));
    }

    #[test]
    fn test_percent() {
        assert_eq!(cell_value(&sample_row(), "interaction-rate"), CellValue::Decimal(7.05));
        assert_eq!(parse_cell("%", ValueKind::Percent), CellValue::Decimal(0.0));
    }

    #[test]
    fn test_text_is_trimmed_and_lowercased() {
        assert_eq!(
            cell_value(&sample_row(), "search-term"),
            CellValue::Text("running shoes".to_string())
        );
        assert_eq!(
            cell_value(&sample_row(), "match-type"),
            CellValue::Text("phrase".to_string())
        );
    }

    #[test]
    fn test_unknown_column_and_missing_cell() {
        assert_eq!(cell_value(&sample_row(), "campaign"), CellValue::Empty);
        assert_eq!(cell_value(&row(&["", "short row"]), "cost"), CellValue::Empty);
    }

    #[test]
    fn test_empty_sorts_lowest() {
        assert!(CellValue::Empty < CellValue::Integer(-5));
        assert!(CellValue::Empty < CellValue::Text(String::new()));
        assert!(CellValue::Decimal(0.5) < CellValue::Decimal(1.0));
        assert!(CellValue::Text("apple".into()) < CellValue::Text("banana".into()));
    }

    #[test]
    fn test_leading_decimal_forms() {
        assert_eq!(leading_decimal("5."), 5.0);
        assert_eq!(leading_decimal(".5"), 0.5);
        assert_eq!(leading_decimal("-2.5x"), -2.5);
        assert_eq!(leading_decimal("1e3"), 1000.0);
        assert_eq!(leading_decimal("1e"), 1.0);
        assert_eq!(leading_decimal("-"), 0.0);
        assert_eq!(leading_decimal("-0"), 0.0);
    }
}
