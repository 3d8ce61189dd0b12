use bolboeklib::{
    batch::run,
    config::Config,
    formats::{csv::HEADERS, xlsx::BolXlsx},
    model::TransactionKind,
    traits::ReadFormat,
};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, XlsxError};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tempfile::TempDir;

const SALE_LINE: &str =
    "01.02.2024,Factuur verstuurd,130010,123_SALE_NL_NL,,,HOOG,,10.00,800000,130010,123,30";
const REFUND_LINE: &str =
    "03.04.2024,Memoriaal,804001,456_REFUND_NL_DE,,5.00,,,,130010,130010,,30";

/// Лист в формате bol.com: шапка в `banner`, заголовок в строке 8 начиная с `col`.
fn write_export(
    path: &Path,
    col: u16,
    banner: &[(u32, &str)],
    sale_date_cell: bool,
) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();

    for (row, text) in banner {
        ws.write_string(*row, col, *text)?;
    }
    let header = ["Type", "Bestelnummer", "Land van verzending", "Bedrag", "Datum"];
    for (i, name) in header.iter().enumerate() {
        ws.write_string(7, col + i as u16, *name)?;
    }

    ws.write_string(8, col, TransactionKind::Sale.source_label())?;
    ws.write_number(8, col + 1, 123.0)?;
    ws.write_string(8, col + 2, "NL")?;
    ws.write_number(8, col + 3, 10.0)?;
    if sale_date_cell {
        let date = ExcelDateTime::from_ymd(2024, 2, 1)?;
        let format = Format::new().set_num_format("dd-mm-yyyy");
        ws.write_datetime_with_format(8, col + 4, &date, &format)?;
    } else {
        ws.write_string(8, col + 4, "01-02-2024")?;
    }

    ws.write_string(9, col, "Commissie")?;
    ws.write_string(9, col + 1, "123")?;
    ws.write_string(9, col + 2, "NL")?;
    ws.write_string(9, col + 3, "€-1.20")?;
    ws.write_string(9, col + 4, "01-02-2024")?;

    ws.write_string(10, col, TransactionKind::Refund.source_label())?;
    ws.write_string(10, col + 1, "456")?;
    ws.write_string(10, col + 2, "DE")?;
    ws.write_string(10, col + 3, "€-5.00")?;
    ws.write_string(10, col + 4, "03-04-2024")?;

    workbook.save(path)
}

fn cfg_for(dir: &Path) -> Config {
    Config {
        input_dir: dir.to_path_buf(),
        export_dir: dir.join("export"),
        ..Config::default()
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read output")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn sparse_banner_in_column_a() {
    let tmp = TempDir::new().expect("tmp");
    let input = tmp.path().join("bol-jan.xlsx");
    write_export(&input, 0, &[(1, "Verkoopoverzicht"), (4, "Periode: januari")], false)
        .expect("write workbook");

    let cfg = cfg_for(tmp.path());
    let file = File::open(&input).expect("open workbook");
    let txs = BolXlsx::read(BufReader::new(file), &cfg).expect("read");
    assert_eq!(txs.len(), 3);
    assert_eq!(txs[0].order_number, "123");
    assert_eq!(txs[0].amount, "10.00");

    let report = run(&cfg).expect("run");
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].rows_read, 3);
    assert_eq!(report.lines_written(), 2);

    let out = tmp.path().join("export").join("exp_bol-jan.csv");
    assert_eq!(report.files[0].output, out);
    assert_eq!(read_lines(&out), [HEADERS.join(","), SALE_LINE.into(), REFUND_LINE.into()]);
}

#[test]
fn table_shifted_right_with_date_cells() {
    let tmp = TempDir::new().expect("tmp");
    write_export(&tmp.path().join("feb.xlsx"), 2, &[(2, "Verkoopoverzicht")], true)
        .expect("write workbook");

    let report = run(&cfg_for(tmp.path())).expect("run");
    assert_eq!(report.lines_written(), 2);

    let lines = read_lines(&tmp.path().join("export").join("exp_feb.csv"));
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], HEADERS.join(","));
    assert_eq!(
        lines[1],
        "2024.02.01,Factuur verstuurd,130010,123_SALE_NL_NL,,,HOOG,,10.00,800000,130010,123,30"
    );
    assert_eq!(lines[2], REFUND_LINE);
}
