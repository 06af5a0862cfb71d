use super::*;

const FILE_LABEL_CLASS: &str = "code-filename";

/// Replaces each code block's content with highlighted markup and inserts
/// the optional file name label in front of it.
pub(crate) struct HighlightCodeBlocksStage;

impl Stage for HighlightCodeBlocksStage {
  fn name(&self) -> &'static str {
    "highlight-code-blocks"
  }

  fn run(&mut self, context: &mut Context<'_>) {
    let highlighted_class = &context.options().highlighted_class;

    for code in context.document().select(&context.selectors().code).iter() {
      let block = CodeBlock::new(
        code.attr("class").as_deref(),
        code.text().to_string(),
      );

      let highlighted = context
        .highlighter()
        .highlight(&block.raw_text, block.language_hint.as_deref());

      tracing::trace!(
        hint = block.language_hint.as_deref(),
        language = highlighted.language.as_str(),
        "highlighted code block"
      );

      if let Some(html) = highlighted.html {
        code.set_html(html);
      }

      code.add_class(highlighted_class);

      if let Some(label) = &block.file_label {
        let block = enclosing_block(&code);

        block.before_html(format!(
          r#"<div class="{FILE_LABEL_CLASS}"><span></span></div>"#
        ));

        block.prev_sibling().select("span").set_text(label);
      }
    }
  }
}
