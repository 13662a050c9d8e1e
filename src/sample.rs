//! Estrutura de teste: planilha, arquivos e configuração de exemplo

use crate::config::Config;
use crate::error::Result;
use rust_xlsxwriter::Workbook;
use std::fs::File;
use std::path::{Path, PathBuf};

pub const SAMPLE_SPREADSHEET: &str = "PLANILHA_TESTE.xlsx";
pub const SAMPLE_FOLDER: &str = "arquivos";
pub const SAMPLE_CONFIG: &str = "config.json";

/// processo, cliente, adverso, advogado
pub const SAMPLE_ROWS: &[[&str; 4]] = &[
    ["12345", "Empresa A", "Empresa B", "Dr. Fulano"],
    ["67890", "João Silva", "Maria Oliveira", "Dra. Ciclana"],
    ["11111", "Empresa A", "Empresa B", "Dr. Fulano"],
    ["22222", "Maria Souza", "Carlos Pereira", "Dra. Beltrana"],
];

/// 99999 não está na planilha
pub const SAMPLE_FILES: &[&str] = &["12345.pdf", "67890.pdf", "99999.pdf", "11111.pdf"];

/// Caminhos criados por [`create_sample`]
#[derive(Debug, Clone)]
pub struct SampleLayout {
    pub spreadsheet: PathBuf,
    pub folder: PathBuf,
    pub config_file: PathBuf,
    pub config: Config,
}

/// Grava uma planilha com os cabeçalhos e a aba da configuração
pub fn write_spreadsheet(path: &Path, base: &Config, rows: &[[&str; 4]]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&base.sheet_name)?;

    for (col, header) in base.columns.required().iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string(row_idx as u32 + 1, col as u16, *value)?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Cria `root/PLANILHA_TESTE.xlsx`, `root/arquivos/*.pdf` e `root/config.json`
pub fn create_sample(root: &Path, base: &Config) -> Result<SampleLayout> {
    let folder = root.join(SAMPLE_FOLDER);
    std::fs::create_dir_all(&folder)?;

    let spreadsheet = root.join(SAMPLE_SPREADSHEET);
    write_spreadsheet(&spreadsheet, base, SAMPLE_ROWS)?;

    for name in SAMPLE_FILES {
        File::create(folder.join(name))?;
    }

    let config = Config {
        spreadsheet_path: spreadsheet.clone(),
        ..base.clone()
    };
    let config_file = root.join(SAMPLE_CONFIG);
    config.save_to(&config_file)?;

    Ok(SampleLayout {
        spreadsheet,
        folder,
        config_file,
        config,
    })
}
