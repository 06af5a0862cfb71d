use {super::*, copy_button::CopyButton};

pub(crate) struct Selectors {
  pub(crate) code: Matcher,
  pub(crate) heading: Matcher,
}

impl Selectors {
  fn compile(selector: &str) -> Result<Matcher> {
    Matcher::new(selector)
      .map_err(|_| Error::InvalidSelector(selector.to_string()))
  }

  fn new(options: &ProcessorOptions) -> Result<Self> {
    Ok(Self {
      code: Self::compile(&options.code_selector)?,
      heading: Self::compile(&options.heading_selector)?,
    })
  }
}

/// Enhances CMS article HTML for display.
///
/// A processor is built once from [`ProcessorOptions`] and then applied to
/// any number of article bodies. Processing never fails: code blocks whose
/// language cannot be highlighted degrade to best-guess detection.
///
/// Processing is not idempotent. Feeding output back in wraps headings and
/// code blocks a second time.
///
/// A heading that already contains a link ends up with that link nested
/// inside the heading anchor. Browsers re-parse nested anchors as siblings,
/// so the inner link stays clickable but the outer anchor stops at it.
pub struct Processor {
  pub(crate) copy_button: CopyButton,
  pub(crate) highlighter: Highlighter,
  pub(crate) options: ProcessorOptions,
  pub(crate) selectors: Selectors,
}

impl Processor {
  pub fn new(options: ProcessorOptions) -> Result<Self> {
    Ok(Self {
      copy_button: CopyButton::new(&options.copy_button_label),
      highlighter: Highlighter::new(&options.auto_detect_languages)?,
      selectors: Selectors::new(&options)?,
      options,
    })
  }

  #[must_use]
  pub fn options(&self) -> &ProcessorOptions {
    &self.options
  }

  /// Adds heading anchors, highlights code blocks and attaches copy buttons,
  /// returning the new markup along with the headings in document order.
  #[must_use]
  pub fn process(&self, html: &str) -> ProcessedContent {
    let document = Document::parse(html);

    let mut context =
      Pipeline::with_default_stages(Context::new(&document, self)).run();

    let headings = context.headings();

    let mut html = context.document().body_html();

    if self.options.copy_button == Some(CopyButtonStrategy::Template) {
      html = self.copy_button.render_template(&html);
    }

    if self.options.inline_script && self.options.copy_button.is_some() {
      html.push_str("<script>");
      html.push_str(COPY_CODE_SCRIPT);
      html.push_str("</script>");
    }

    tracing::debug!(headings = headings.len(), "processed article content");

    ProcessedContent { html, headings }
  }
}
