//! Доменные модели: строка выгрузки bol.com и проводка для e-Boekhouden.

/// Распознаваемые типы транзакций. Всё, что зависит от типа, живёт здесь.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Sale,
    Refund,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Sale, TransactionKind::Refund];

    /// Точное значение колонки `Type` в выгрузке bol.com.
    pub fn source_label(self) -> &'static str {
        match self {
            TransactionKind::Sale => {
                "Verkoopprijs artikel(en), ontvangen van kopers en door bol.com door te storten"
            }
            TransactionKind::Refund => "Correctie verkoopprijs artikel(en)",
        }
    }

    pub fn from_source_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.source_label() == label)
    }

    pub fn description_tag(self) -> &'static str {
        match self {
            TransactionKind::Sale => "SALE",
            TransactionKind::Refund => "REFUND",
        }
    }

    pub fn invoice_prefix(self) -> &'static str {
        match self {
            TransactionKind::Sale => "",
            TransactionKind::Refund => "r",
        }
    }
}

/// Одна строка выгрузки, значения как прочитаны из ячеек.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub kind: String,
    pub order_number: String,
    pub shipping_country: Option<String>,
    pub amount: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    InvoiceSent,
    Journal,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::InvoiceSent => "Factuur verstuurd",
            EntryKind::Journal => "Memoriaal",
        }
    }
}

/// Строка импорта (обогащённая запись). Порядок полей = порядок колонок.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalLine {
    pub date: String,
    pub entry_kind: EntryKind,
    pub account: String,
    pub description: String,
    pub document_ref: String,
    pub amount_excl: String,
    pub tax_code: String,
    pub tax_amount: String,
    pub amount_incl: String,
    pub counter_account: String,
    pub relation: String,
    pub invoice_number: String,
    pub payment_term: String,
}
