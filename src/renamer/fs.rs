use std::io;
use std::path::Path;

/// Operação de renomear usada pelo executor
pub trait FileSystem {
    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()>;

    /// Nenhuma alteração é gravada em disco
    fn is_dry_run(&self) -> bool {
        false
    }
}

/// Renomeia no disco, sem nunca sobrescrever um arquivo existente
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        if std::fs::symlink_metadata(to).is_ok() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("o destino já existe: {}", to.display()),
            ));
        }

        std::fs::rename(from, to)
    }
}

/// Simulação: só aceita a renomeação
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunFileSystem;

impl FileSystem for DryRunFileSystem {
    fn rename(&mut self, _from: &Path, _to: &Path) -> io::Result<()> {
        Ok(())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
