#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("invalid selector: {0}")]
  InvalidSelector(String),
  #[error("failed to read `{path}`: {source}")]
  Io {
    path: String,
    source: std::io::Error,
  },
  #[error("invalid article data: {source}")]
  Json {
    #[from]
    source: serde_json::Error,
  },
  #[error("page size must be greater than zero")]
  ZeroPageSize,
  #[error("unknown language for auto-detection: {0}")]
  UnknownLanguage(String),
}
