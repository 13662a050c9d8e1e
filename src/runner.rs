use crate::config::Config;
use crate::error::Result;
use crate::renamer::{self, FileSystem};
use crate::report::Reporter;
use crate::{scanner, table};
use case_renamer_common::RenameSummary;
use std::path::Path;

/// Executa uma rodada completa: planilha → tabela → pasta → renomeação
///
/// Erros de configuração, planilha ou pasta interrompem a execução.
/// Falhas ao renomear um arquivo só aparecem no resumo.
pub fn run_batch<F, R>(
    config: &Config,
    folder: &Path,
    fs: &mut F,
    reporter: &mut R,
) -> Result<RenameSummary>
where
    F: FileSystem + ?Sized,
    R: Reporter + ?Sized,
{
    config.validate()?;
    reporter.on_start(config, folder);

    let loaded = table::load_table(&config.spreadsheet_path, &config.sheet_name, &config.columns)?;
    reporter.on_table_loaded(&loaded);

    let files = scanner::scan_folder(folder)?;
    reporter.on_scan(folder, files.len());

    let summary = renamer::rename_files(&files, &loaded.table, &config.retry_policy(), fs, reporter);
    reporter.on_summary(&summary);

    Ok(summary)
}
