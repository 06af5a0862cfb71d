use super::*;

/// Wraps the content of each subheading in a self-referencing anchor and
/// records the heading for the table of contents.
pub(crate) struct HeadingAnchorStage;

impl Stage for HeadingAnchorStage {
  fn name(&self) -> &'static str {
    "heading-anchors"
  }

  fn run(&mut self, context: &mut Context<'_>) {
    let style = context.options().anchor_style;

    let headings = context.document().select(&context.selectors().heading);

    for (index, element) in headings.iter().enumerate() {
      let heading = Heading::new(element.text().to_string(), style, index + 1);

      Self::wrap_contents(&element, &heading);

      context.push_heading(heading);
    }
  }
}

impl HeadingAnchorStage {
  fn wrap_contents(element: &Selection<'_>, heading: &Heading) {
    let contents = element.inner_html();

    element.set_html("<a></a>");

    let anchor = element.select("a").first();

    anchor.set_attr("id", &heading.anchor_id);
    anchor.set_attr("href", &heading.href());
    anchor.set_html(contents);
  }
}
