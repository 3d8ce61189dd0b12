//! bolboeklib: конвертация выгрузок транзакций bol.com (.xlsx) в импорт
//! проводок e-Boekhouden (.csv).

pub mod batch;
pub mod config;
pub mod convert;
pub mod discover;
pub mod error;
pub mod model;
pub mod traits;

pub mod formats {
    pub mod csv;
    pub mod xlsx;
}
