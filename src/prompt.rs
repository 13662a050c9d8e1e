//! Entrada interativa: pasta dos arquivos e pausa final

use crate::error::Result;
use crate::scanner::validate_directory;
use dialoguer::Input;
use std::path::PathBuf;

/// Limpa o caminho digitado: espaços e aspas nas pontas
///
/// O "Copiar como caminho" do Windows coloca o caminho entre aspas.
pub fn normalize_input_path(input: &str) -> PathBuf {
    let trimmed = input.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(trimmed);

    PathBuf::from(unquoted.trim())
}

/// Pede a pasta até o usuário informar uma pasta existente
pub fn prompt_folder() -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt("Digite o caminho COMPLETO da pasta com os arquivos a serem renomeados")
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            validate_directory(&normalize_input_path(input)).map_err(|e| e.to_string())
        })
        .interact_text()?;

    Ok(normalize_input_path(&input))
}

/// Mantém a janela aberta até o ENTER
pub fn wait_for_enter() -> Result<()> {
    let _: String = Input::new()
        .with_prompt("\nPressione ENTER para fechar a janela")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}
