use super::*;

pub(crate) struct Context<'a> {
  copy_button: &'a copy_button::CopyButton,
  headings: Vec<Heading>,
  highlighter: &'a Highlighter,
  html: &'a dom_query::Document,
  options: &'a ProcessorOptions,
  selectors: &'a processor::Selectors,
}

impl<'a> Context<'a> {
  pub(crate) fn copy_button(&self) -> &copy_button::CopyButton {
    self.copy_button
  }

  pub(crate) fn document(&self) -> Document<'a> {
    Document::new(self.html)
  }

  pub(crate) fn headings(&mut self) -> Vec<Heading> {
    std::mem::take(&mut self.headings)
  }

  pub(crate) fn highlighter(&self) -> &Highlighter {
    self.highlighter
  }

  pub(crate) fn new(
    html: &'a dom_query::Document,
    processor: &'a Processor,
  ) -> Self {
    Self {
      copy_button: &processor.copy_button,
      headings: Vec::new(),
      highlighter: &processor.highlighter,
      html,
      options: &processor.options,
      selectors: &processor.selectors,
    }
  }

  pub(crate) fn options(&self) -> &ProcessorOptions {
    self.options
  }

  pub(crate) fn push_heading(&mut self, heading: Heading) {
    self.headings.push(heading);
  }

  pub(crate) fn selectors(&self) -> &processor::Selectors {
    self.selectors
  }
}
