use crate::error::{RenameError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Arquivo encontrado na pasta
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub file_name: String,
}

/// Verifica se o caminho existe e é uma pasta
pub fn validate_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(RenameError::DirectoryNotFound(path.display().to_string()));
    }

    if !path.is_dir() {
        return Err(RenameError::NotADirectory(path.display().to_string()));
    }

    Ok(())
}

/// Lista os arquivos da pasta (sem entrar em subpastas)
pub fn scan_folder(folder: &Path) -> Result<Vec<FileEntry>> {
    validate_directory(folder)?;

    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // só o nível da pasta, sem recursão
        .into_iter()
    {
        let entry = entry.map_err(|e| {
            RenameError::Unexpected(format!("falha ao listar '{}': {}", folder.display(), e))
        })?;
        let path = entry.path();

        // Segue links simbólicos, como a verificação de arquivo do sistema
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();

        files.push(FileEntry {
            path: path.to_path_buf(),
            file_name,
        });
    }

    // Ordena pelo nome do arquivo
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}
