use super::*;

mod copy_buttons;
mod heading_anchors;
mod highlight_code_blocks;

pub(crate) use {
  copy_buttons::CopyButtonStage, heading_anchors::HeadingAnchorStage,
  highlight_code_blocks::HighlightCodeBlocksStage,
};

pub(crate) trait Stage {
  fn name(&self) -> &'static str;

  fn run(&mut self, context: &mut Context<'_>);
}

/// The element a code block occupies in the flow: its `<pre>` parent when
/// there is one, the code element itself otherwise.
fn enclosing_block<'a>(code: &Selection<'a>) -> Selection<'a> {
  let parent = code.parent();

  if parent.is("pre") {
    parent
  } else {
    code.clone()
  }
}
