use std::backtrace::Backtrace;

use crate::puzzle::SymbolKind;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A rule or symbol kind with no corresponding solver module.
///
/// Solving a puzzle while silently ignoring one of its constraints would
/// produce "solutions" that violate it, so translation refuses outright.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("no solver module for rule kind `{0}`")]
    UnsupportedRule(String),
    #[error("no solver module for symbol kind `{0:?}`")]
    UnsupportedSymbol(SymbolKind),
    #[error("rule `{0}` cannot target the gray colour")]
    GrayRuleColor(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("translation failed: {inner}\n{backtrace}")]
    Translation {
        inner: Box<TranslationError>,
        backtrace: Box<Backtrace>,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed puzzle file: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<TranslationError> for Error {
    fn from(inner: TranslationError) -> Self {
        Error::Translation {
            inner: Box::new(inner),
            backtrace: Box::new(Backtrace::capture()),
        }
    }
}
