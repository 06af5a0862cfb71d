use super::*;

/// Wraps each code block in a container holding a copy-to-clipboard button.
pub(crate) struct CopyButtonStage;

impl Stage for CopyButtonStage {
  fn name(&self) -> &'static str {
    "copy-buttons"
  }

  fn run(&mut self, context: &mut Context<'_>) {
    let mut wrapped = Vec::new();

    for code in context.document().select(&context.selectors().code).iter() {
      let block = enclosing_block(&code);

      let Some(id) = block.nodes().first().map(|node| node.id) else {
        continue;
      };

      if wrapped.contains(&id) {
        continue;
      }

      wrapped.push(id);

      block.replace_with_html(context.copy_button().wrap(&block.html()));
    }
  }
}
