use crate::error::{RenameError, Result};
use crate::renamer::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Planilha principal
pub const DEFAULT_SPREADSHEET: &str = r"y:\2.Planilhas Principais\PLANILHA GERAL 3.xlsx";
/// Nome EXATO da aba
pub const DEFAULT_SHEET: &str = "Processo";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 1;

/// Nomes EXATOS das colunas na planilha (diferencia maiúsculas e minúsculas)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub process_id: String,
    pub client: String,
    pub opponent: String,
    pub lawyer: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            process_id: "Número do processo".into(),
            client: "Cliente principal".into(),
            opponent: "Contrário principal".into(),
            lawyer: "ADVOGADO".into(),
        }
    }
}

impl ColumnNames {
    /// Colunas obrigatórias na ordem: processo, cliente, adverso, advogado
    pub fn required(&self) -> [&str; 4] {
        [
            self.process_id.as_str(),
            self.client.as_str(),
            self.opponent.as_str(),
            self.lawyer.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub spreadsheet_path: PathBuf,
    pub sheet_name: String,
    pub columns: ColumnNames,
    pub max_attempts: u32,
    pub retry_delay_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spreadsheet_path: PathBuf::from(DEFAULT_SPREADSHEET),
            sheet_name: DEFAULT_SHEET.into(),
            columns: ColumnNames::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay_secs: DEFAULT_RETRY_DELAY_SECS,
        }
    }
}

impl Config {
    /// Carrega do caminho padrão; sem arquivo, usa os valores padrão
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RenameError::Config("pasta do usuário não encontrada".into()))?;
        Ok(home.join(".config").join("case-renamer").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.sheet_name.trim().is_empty() {
            return Err(RenameError::Config("nome da aba vazio".into()));
        }

        let labels = ["processo", "cliente", "adverso", "advogado"];
        for (label, column) in labels.iter().zip(self.columns.required()) {
            if column.trim().is_empty() {
                return Err(RenameError::Config(format!("nome da coluna de {} vazio", label)));
            }
        }

        if self.max_attempts == 0 {
            return Err(RenameError::Config("max_attempts deve ser pelo menos 1".into()));
        }

        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            delay: Duration::from_secs(self.retry_delay_secs),
        }
    }
}
