//! Montagem do novo nome de arquivo
//!
//! Formato: `{processo} - {advogado} - {cliente} X {adverso}{extensão}`
//!
//! O nome montado passa por limpeza: caracteres proibidos em nomes de
//! arquivo do Windows são removidos e espaços repetidos viram um só.

use crate::types::Record;
use lazy_static::lazy_static;
use regex::Regex;

/// Marcador para advogado ausente
pub const LAWYER_PLACEHOLDER: &str = "ADVOGADO_NAO_INFO";
/// Marcador para cliente ausente
pub const CLIENT_PLACEHOLDER: &str = "CLIENTE_NAO_INFO";
/// Marcador para parte adversa ausente
pub const OPPONENT_PLACEHOLDER: &str = "ADVERSO_NAO_INFO";

/// Caracteres removidos do nome final
pub const FORBIDDEN_CHARS: &[char] = &['\\', '/', '|', ':', '*', '?', '"', '<', '>'];

lazy_static! {
    static ref FORBIDDEN_RE: Regex = Regex::new(r#"[\\/|:*?"<>]"#).unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Separa o nome do arquivo em (base, extensão)
///
/// A extensão inclui o ponto. Pontos no início do nome não contam como
/// separador.
///
/// # Examples
/// ```
/// use case_renamer_common::split_extension;
///
/// assert_eq!(split_extension("12345.pdf"), ("12345", ".pdf"));
/// assert_eq!(split_extension(".hidden"), (".hidden", ""));
/// ```
pub fn split_extension(file_name: &str) -> (&str, &str) {
    let leading = file_name.len() - file_name.trim_start_matches('.').len();

    match file_name[leading..].rfind('.') {
        Some(pos) => file_name.split_at(leading + pos),
        None => (file_name, ""),
    }
}

/// Monta o novo nome do arquivo a partir do Record
///
/// # Arguments
/// * `identifier` - número do processo (base do nome atual)
/// * `record` - dados da planilha
/// * `extension` - extensão original, com ponto (ou vazia)
///
/// # Examples
/// ```
/// use case_renamer_common::{synthesize_name, Record};
///
/// let record = Record::new(
///     Some("Dr. Fulano".into()),
///     Some("Empresa A".into()),
///     Some("Empresa B".into()),
/// );
/// assert_eq!(
///     synthesize_name("12345", &record, ".pdf"),
///     "12345 - Dr. Fulano - Empresa A X Empresa B.pdf"
/// );
/// ```
pub fn synthesize_name(identifier: &str, record: &Record, extension: &str) -> String {
    let lawyer = field_or(record.lawyer.as_deref(), LAWYER_PLACEHOLDER);
    let client = field_or(record.client.as_deref(), CLIENT_PLACEHOLDER);
    let opponent = field_or(record.opponent.as_deref(), OPPONENT_PLACEHOLDER);

    let composed = format!(
        "{} - {} - {} X {}{}",
        identifier.trim(),
        lawyer,
        client,
        opponent,
        extension
    );

    sanitize_file_name(&composed)
}

/// Remove caracteres proibidos e normaliza espaços
pub fn sanitize_file_name(name: &str) -> String {
    let stripped = FORBIDDEN_RE.replace_all(name, "");
    WHITESPACE_RE.replace_all(stripped.trim(), " ").into_owned()
}

fn field_or<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
}
