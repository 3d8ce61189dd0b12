//! Трэйты чтения выгрузки и записи импорта.

use crate::{
    config::Config,
    error::Result,
    model::{JournalLine, Transaction},
};
use std::io::{Read, Seek, Write};

pub trait ReadFormat {
    fn read<R: Read + Seek>(r: R, cfg: &Config) -> Result<Vec<Transaction>>;
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, lines: &[JournalLine]) -> Result<()>;
}
