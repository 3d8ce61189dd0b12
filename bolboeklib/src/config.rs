//! Настройки конвертации. По умолчанию совпадают с исходным скриптом.
//!
//! Слои: значения по умолчанию <- TOML-файл (если задан) <- переменные `BOLBOEK_*`.
//! Вложенные ключи в окружении разделяются `__`: `BOLBOEK_ACCOUNTS__SALES_OSS`.

use crate::error::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "BOLBOEK_";

/// Коды счетов числовые: `130010` из окружения или TOML без кавычек
/// приходит числом, храним как текст.
fn code<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match Code::deserialize(d)? {
        Code::Text(s) => s,
        Code::Unsigned(n) => n.to_string(),
        Code::Signed(n) => n.to_string(),
    })
}

/// Счета плана e-Boekhouden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Accounts {
    #[serde(deserialize_with = "code")]
    pub relation: String,
    #[serde(deserialize_with = "code")]
    pub debtor: String,
    #[serde(deserialize_with = "code")]
    pub sales_tax_high: String,
    #[serde(deserialize_with = "code")]
    pub sales_oss: String,
}

impl Default for Accounts {
    fn default() -> Self {
        Self {
            relation: "130010".into(),
            debtor: "130010".into(),
            sales_tax_high: "800000".into(),
            sales_oss: "804001".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input_dir: PathBuf,
    pub export_dir: PathBuf,
    pub extension: String,
    pub output_extension: String,
    pub output_prefix: String,
    /// Строки-«шапка» перед заголовком таблицы.
    pub banner_rows: usize,
    pub domestic_country: String,
    #[serde(deserialize_with = "code")]
    pub payment_term: String,
    pub accounts: Accounts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            export_dir: PathBuf::from("./export"),
            extension: ".xlsx".into(),
            output_extension: ".csv".into(),
            output_prefix: "exp_".into(),
            banner_rows: 7,
            domestic_country: "NL".into(),
            payment_term: "30".into(),
            accounts: Accounts::default(),
        }
    }
}

impl Config {
    pub fn figment(file: Option<&Path>) -> Figment {
        Self::figment_over(Config::default(), file)
    }

    /// Как `figment`, но нижний слой задаёт вызывающий (например, `--dir`).
    pub fn figment_over(base: Config, file: Option<&Path>) -> Figment {
        let mut fig = Figment::from(Serialized::defaults(base));
        if let Some(path) = file {
            fig = fig.merge(Toml::file(path));
        }
        fig.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Явно указанный, но отсутствующий файл считается ошибкой.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_over(Config::default(), file)
    }

    pub fn load_over(base: Config, file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            if !path.is_file() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file {} not found", path.display()),
                )
                .into());
            }
        }
        Ok(Self::figment_over(base, file).extract()?)
    }
}
