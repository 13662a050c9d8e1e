use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Planilha não encontrada: {0}")]
    SourceNotFound(String),

    #[error("Aba '{sheet}' não encontrada na planilha (abas disponíveis: {available})")]
    MissingSheet { sheet: String, available: String },

    #[error("Coluna(s) não encontrada(s) na planilha: {0}")]
    MissingColumn(String),

    #[error("A aba '{0}' está vazia ou não contém números de processo válidos")]
    EmptyData(String),

    #[error("Pasta não encontrada: {0}")]
    DirectoryNotFound(String),

    #[error("O caminho não é uma pasta: {0}")]
    NotADirectory(String),

    #[error("Falha ao renomear '{file}' após {attempts} tentativa(s): {source}")]
    RenameFailed {
        file: String,
        attempts: u32,
        #[source]
        source: std::io::Error,
    },

    #[error("Erro ao ler a planilha: {0}")]
    Spreadsheet(String),

    #[error("Erro ao gerar a planilha: {0}")]
    ExcelGeneration(String),

    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro na entrada de dados: {0}")]
    Prompt(String),

    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro inesperado: {0}")]
    Unexpected(String),
}

impl RenameError {
    /// Dica mostrada ao usuário junto com a mensagem de erro
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            RenameError::SourceNotFound(_) => Some(
                "Verifique o caminho da planilha na configuração (`case-renamer config --show`).",
            ),
            RenameError::MissingSheet { .. } => {
                Some("O nome da aba precisa ser EXATO (diferencia maiúsculas e minúsculas).")
            }
            RenameError::MissingColumn(_) => Some(
                "Os nomes das colunas na configuração precisam ser EXATOS (diferencia maiúsculas e minúsculas).",
            ),
            RenameError::EmptyData(_) => {
                Some("Confira se a coluna do número do processo está preenchida.")
            }
            RenameError::DirectoryNotFound(_) | RenameError::NotADirectory(_) => {
                Some("Informe o caminho COMPLETO de uma pasta existente.")
            }
            RenameError::RenameFailed { .. } => {
                Some("O arquivo pode estar aberto em outro programa ou sem permissão de escrita.")
            }
            RenameError::Spreadsheet(_) => {
                Some("Verifique se o arquivo é uma planilha válida e não está corrompido.")
            }
            RenameError::Config(_) | RenameError::JsonParse(_) => Some(
                "Corrija o arquivo de configuração ou gere um novo com `case-renamer config --init`.",
            ),
            RenameError::ExcelGeneration(_)
            | RenameError::Prompt(_)
            | RenameError::Io(_)
            | RenameError::Unexpected(_) => None,
        }
    }
}

impl From<calamine::Error> for RenameError {
    fn from(err: calamine::Error) -> Self {
        RenameError::Spreadsheet(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for RenameError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        RenameError::ExcelGeneration(err.to_string())
    }
}

impl From<dialoguer::Error> for RenameError {
    fn from(err: dialoguer::Error) -> Self {
        RenameError::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RenameError>;
