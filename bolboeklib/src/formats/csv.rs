//! Импорт проводок e-Boekhouden, заголовки:
//! Datum,Soort,Rekening,Omschrijving,Boekstuk,Bedrag excl,BTW-code,BTW-bedrag,Bedrag incl,Tegenrekening,Relatie,Factuurnummer,Betalingstermijn

use crate::{error::Result, model::JournalLine};
use csv::WriterBuilder;
use std::io::Write;

pub const HEADERS: [&str; 13] = [
    "Datum",
    "Soort",
    "Rekening",
    "Omschrijving",
    "Boekstuk",
    "Bedrag excl",
    "BTW-code",
    "BTW-bedrag",
    "Bedrag incl",
    "Tegenrekening",
    "Relatie",
    "Factuurnummer",
    "Betalingstermijn",
];

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    date: &'a str,
    entry_kind: &'a str,
    account: &'a str,
    description: &'a str,
    document_ref: &'a str,
    amount_excl: &'a str,
    tax_code: &'a str,
    tax_amount: &'a str,
    amount_incl: &'a str,
    counter_account: &'a str,
    relation: &'a str,
    invoice_number: &'a str,
    payment_term: &'a str,
}

impl<'a> From<&'a JournalLine> for CsvOutRow<'a> {
    fn from(l: &'a JournalLine) -> Self {
        Self {
            date: &l.date,
            entry_kind: l.entry_kind.label(),
            account: &l.account,
            description: &l.description,
            document_ref: &l.document_ref,
            amount_excl: &l.amount_excl,
            tax_code: &l.tax_code,
            tax_amount: &l.tax_amount,
            amount_incl: &l.amount_incl,
            counter_account: &l.counter_account,
            relation: &l.relation,
            invoice_number: &l.invoice_number,
            payment_term: &l.payment_term,
        }
    }
}

pub struct JournalCsv;

impl crate::traits::WriteFormat for JournalCsv {
    fn write<W: Write>(mut w: W, lines: &[JournalLine]) -> Result<()> {
        // заголовок пишем сами: serde не выведет его для пустого файла
        let mut wrt = WriterBuilder::new().has_headers(false).from_writer(&mut w);
        wrt.write_record(HEADERS)?;

        for l in lines {
            wrt.serialize(CsvOutRow::from(l))?;
        }
        wrt.flush()?;
        Ok(())
    }
}
