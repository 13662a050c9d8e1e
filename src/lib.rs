//! case-renamer
//!
//! Renomeia os arquivos de uma pasta usando os dados de uma planilha:
//! `12345.pdf` → `12345 - {advogado} - {cliente} X {adverso}.pdf`

pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod renamer;
pub mod report;
pub mod runner;
pub mod sample;
pub mod scanner;
pub mod table;

pub use runner::run_batch;
