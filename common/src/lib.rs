//! Case Renamer Common Library
//!
//! Regras puras (sem E/S): tabela de busca, montagem do nome e resumo

pub mod types;
pub mod naming;
pub mod summary;

pub use types::{Record, LookupTable, build_lookup};
pub use naming::{
    synthesize_name, sanitize_file_name, split_extension,
    LAWYER_PLACEHOLDER, CLIENT_PLACEHOLDER, OPPONENT_PLACEHOLDER, FORBIDDEN_CHARS,
};
pub use summary::{FileOutcome, RenameSummary};
