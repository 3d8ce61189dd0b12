//! Выгрузка транзакций bol.com (.xlsx): первый лист, над таблицей несколько
//! строк-«шапки», затем строка заголовков с колонками:
//! Type, Bestelnummer, Land van verzending, Bedrag, Datum

use crate::{
    config::Config,
    error::{BolError, Result},
    model::Transaction,
};
use calamine::{Data, DataType, Reader, Xlsx};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::io::{Read, Seek};

pub const COL_TYPE: &str = "Type";
pub const COL_ORDER: &str = "Bestelnummer";
pub const COL_COUNTRY: &str = "Land van verzending";
pub const COL_AMOUNT: &str = "Bedrag";
pub const COL_DATE: &str = "Datum";

struct Columns {
    kind: usize,
    order: usize,
    country: usize,
    amount: usize,
    date: usize,
}

impl Columns {
    fn locate(header: &[Data]) -> Result<Self> {
        let find = |name: &str| {
            header
                .iter()
                .position(|c| cell_text(c).trim() == name)
                .ok_or_else(|| BolError::Schema(format!("missing column '{name}'")))
        };
        Ok(Self {
            kind: find(COL_TYPE)?,
            order: find(COL_ORDER)?,
            country: find(COL_COUNTRY)?,
            amount: find(COL_AMOUNT)?,
            date: find(COL_DATE)?,
        })
    }
}

pub struct BolXlsx;

impl crate::traits::ReadFormat for BolXlsx {
    fn read<R: Read + Seek>(r: R, cfg: &Config) -> Result<Vec<Transaction>> {
        let mut workbook: Xlsx<R> = Xlsx::new(r)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| BolError::Schema("workbook has no worksheets".into()))??;

        // Range начинается с первой непустой ячейки, а шапка считается от строки 1 листа
        let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
        let skip = cfg.banner_rows.saturating_sub(first_row);

        parse_rows(range.rows(), skip)
    }
}

/// Разбирает строки листа: `skip` строк шапки, заголовок, данные.
pub fn parse_rows<'a, I>(rows: I, skip: usize) -> Result<Vec<Transaction>>
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut rows = rows.into_iter().skip(skip);
    let header = rows
        .next()
        .ok_or_else(|| BolError::Schema(format!("no header row after {skip} banner rows")))?;
    let cols = Columns::locate(header)?;

    let mut out = Vec::new();
    for row in rows {
        if row.iter().all(is_blank) {
            continue;
        }
        let text = |idx: usize| row.get(idx).map(cell_text).unwrap_or_default();
        let country = text(cols.country).trim().to_string();

        out.push(Transaction {
            kind: text(cols.kind),
            order_number: text(cols.order),
            shipping_country: (!country.is_empty()).then_some(country),
            amount: row.get(cols.amount).map(amount_text).unwrap_or_default(),
            date: text(cols.date),
        });
    }
    Ok(out)
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Текстовое значение ячейки. Целые числа (номера заказов) без дробной части,
/// даты как `YYYY-MM-DD`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(|d| d.to_string())
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string(),
    }
}

/// Числовые суммы всегда с двумя знаками: `-5.0` -> `-5.00`.
pub fn amount_text(cell: &Data) -> String {
    let decimal = match cell {
        Data::Float(f) => Decimal::from_f64(*f),
        Data::Int(i) => Some(Decimal::from(*i)),
        _ => None,
    };
    match decimal {
        Some(mut d) => {
            d = d.round_dp(2);
            d.rescale(2);
            d.to_string()
        }
        None => cell_text(cell),
    }
}
