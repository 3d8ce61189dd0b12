//! Преобразование строк выгрузки в проводки. Чистые функции, без I/O.

use crate::{
    config::Config,
    model::{EntryKind, JournalLine, Transaction, TransactionKind},
};
use tracing::debug;

pub const TAX_CODE_HIGH: &str = "HOOG";

pub fn normalize_date(date: &str) -> String {
    date.replace('-', ".")
}

/// Срезает ведущие `-` и `€` в любом порядке: `€-5.00` -> `5.00`.
pub fn strip_amount(amount: &str) -> &str {
    amount.trim_start_matches(['-', '€'])
}

pub fn is_domestic(tx: &Transaction, cfg: &Config) -> bool {
    tx.shipping_country.as_deref() == Some(cfg.domestic_country.as_str())
}

pub fn description(tx: &Transaction, kind: TransactionKind) -> String {
    format!(
        "{}_{}_NL_{}",
        tx.order_number,
        kind.description_tag(),
        tx.shipping_country.as_deref().unwrap_or_default()
    )
}

pub fn enrich(tx: &Transaction, kind: TransactionKind, cfg: &Config) -> JournalLine {
    let domestic = is_domestic(tx, cfg);
    let accounts = &cfg.accounts;
    let sales_account = if domestic {
        &accounts.sales_tax_high
    } else {
        &accounts.sales_oss
    };

    // продажа: дебитор / выручка, возврат: наоборот
    let (account, counter_account) = match kind {
        TransactionKind::Sale => (&accounts.debtor, sales_account),
        TransactionKind::Refund => (sales_account, &accounts.debtor),
    };

    let amount = strip_amount(&tx.amount).to_string();
    let (amount_excl, amount_incl) = if domestic {
        (String::new(), amount)
    } else {
        (amount, String::new())
    };

    JournalLine {
        date: normalize_date(&tx.date),
        entry_kind: if domestic {
            EntryKind::InvoiceSent
        } else {
            EntryKind::Journal
        },
        account: account.clone(),
        description: description(tx, kind),
        document_ref: String::new(),
        amount_excl,
        tax_code: if domestic {
            TAX_CODE_HIGH.to_string()
        } else {
            String::new()
        },
        tax_amount: String::new(),
        amount_incl,
        counter_account: counter_account.clone(),
        relation: accounts.relation.clone(),
        invoice_number: if domestic {
            format!("{}{}", kind.invoice_prefix(), tx.order_number)
        } else {
            String::new()
        },
        payment_term: cfg.payment_term.clone(),
    }
}

/// Оставляет только продажи и возвраты, остальные строки отбрасываются.
pub fn convert(transactions: &[Transaction], cfg: &Config) -> Vec<JournalLine> {
    transactions
        .iter()
        .filter_map(|tx| match TransactionKind::from_source_label(&tx.kind) {
            Some(kind) => Some(enrich(tx, kind, cfg)),
            None => {
                debug!(order = %tx.order_number, kind = %tx.kind, "skipping row");
                None
            }
        })
        .collect()
}
