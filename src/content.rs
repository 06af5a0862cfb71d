use super::*;

/// A subheading found in the article body, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
  pub text: String,
  pub anchor_id: String,
}

impl Heading {
  pub(crate) fn new(text: String, style: AnchorStyle, position: usize) -> Self {
    let anchor_id = match style {
      AnchorStyle::Verbatim => text.clone(),
      AnchorStyle::Slug => {
        let slug = Self::slugify(&text);

        if slug.is_empty() {
          format!("section-{position}")
        } else {
          slug
        }
      }
    };

    Self { text, anchor_id }
  }

  /// The fragment link pointing at this heading's anchor.
  #[must_use]
  pub fn href(&self) -> String {
    format!("#{}", self.anchor_id)
  }

  fn slugify(text: &str) -> String {
    let dashed = re::WHITESPACE_RUNS.replace_all(text.trim(), "-");

    let kept = dashed
      .chars()
      .filter(|ch| ch.is_alphanumeric() || *ch == '-' || *ch == '_')
      .flat_map(char::to_lowercase)
      .collect::<String>();

    re::DASH_RUNS
      .replace_all(&kept, "-")
      .trim_matches('-')
      .to_string()
  }
}

/// The enhanced article body produced by [`Processor::process`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedContent {
  pub html: String,
  pub headings: Vec<Heading>,
}
