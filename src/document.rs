use super::*;

#[derive(Clone, Copy)]
pub(crate) struct Document<'a> {
  document: &'a dom_query::Document,
}

impl<'a> Document<'a> {
  pub(crate) fn body_html(&self) -> String {
    self.document.select("body").inner_html().to_string()
  }

  /// Parses a content fragment so that every node lands in `<body>`,
  /// including leading `<style>` or `<script>` elements.
  pub(crate) fn parse(fragment: &str) -> dom_query::Document {
    dom_query::Document::from(format!("<body>{fragment}</body>"))
  }

  pub(crate) fn new(document: &'a dom_query::Document) -> Self {
    Document { document }
  }

  pub(crate) fn select(&self, matcher: &Matcher) -> Selection<'a> {
    self.document.select_matcher(matcher)
  }
}
