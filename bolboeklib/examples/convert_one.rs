use bolboeklib::{
    config::Config,
    convert::convert,
    formats::{csv::JournalCsv, xlsx::BolXlsx},
    traits::{ReadFormat, WriteFormat},
};
use std::fs::File;
use std::io::BufReader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: одна выгрузка -> импорт в stdout
    let path = std::env::args().nth(1).ok_or("usage: convert_one <export.xlsx>")?;
    let cfg = Config::default();
    let transactions = BolXlsx::read(BufReader::new(File::open(path)?), &cfg)?;
    JournalCsv::write(std::io::stdout(), &convert(&transactions, &cfg))?;
    Ok(())
}
