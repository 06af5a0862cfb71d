const LANGUAGE_PREFIX: &str = "language-";

/// A fenced code block as authored in the CMS.
///
/// The class attribute follows a `:`-delimited convention: the first
/// segment is `language-<lang>`, the optional second segment is a file name
/// shown above the block, e.g. `language-js:app.ts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CodeBlock {
  pub(crate) file_label: Option<String>,
  pub(crate) language_hint: Option<String>,
  pub(crate) raw_text: String,
}

impl CodeBlock {
  pub(crate) fn new(class: Option<&str>, raw_text: String) -> Self {
    let mut segments = class.unwrap_or_default().split(':');

    let language_hint = segments
      .next()
      .map(str::trim)
      .map(|segment| segment.strip_prefix(LANGUAGE_PREFIX).unwrap_or(segment))
      .filter(|language| !language.is_empty())
      .map(str::to_string);

    let file_label = segments
      .next()
      .map(str::trim)
      .filter(|label| !label.is_empty())
      .map(str::to_string);

    Self {
      file_label,
      language_hint,
      raw_text,
    }
  }
}
