use {super::*, regex::Captures};

/// Client-side behavior for copy buttons.
///
/// Listens for clicks on `[data-copy-code]` buttons, copies the text of the
/// sibling `<code>` element and swaps the icon for a checkmark for two
/// seconds. Attach it once per page with the host's script loader, or set
/// [`ProcessorOptions::inline_script`].
pub const COPY_CODE_SCRIPT: &str = include_str!("copy_code.js");

pub(crate) const CONTAINER_CLASS: &str = "code-block group";

const COPY_ICON: &str = concat!(
  r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" "#,
  r#"viewBox="0 0 24 24" fill="none" stroke="currentColor" "#,
  r#"stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
  r#"<rect x="9" y="9" width="13" height="13" rx="2" ry="2"></rect>"#,
  r#"<path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1">"#,
  r#"</path></svg>"#
);

/// How copy buttons are attached to code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyButtonStrategy {
  /// Rewrite the serialized output, matching bare `<pre><code>` pairs.
  Template,
  /// Wrap blocks in the parsed document while the pipeline runs.
  Tree,
}

#[derive(Debug, Clone)]
pub(crate) struct CopyButton {
  markup: String,
}

impl CopyButton {
  pub(crate) fn new(label: &str) -> Self {
    let document = dom_query::Document::from(format!(
      concat!(
        r#"<button type="button" class="copy-button group-hover:opacity-100" "#,
        r#"data-copy-code="">{}</button>"#
      ),
      COPY_ICON
    ));

    let button = document.select("button");

    button.set_attr("aria-label", label);

    Self {
      markup: button.html().to_string(),
    }
  }

  /// Applies the template strategy to serialized HTML.
  pub(crate) fn render_template(&self, html: &str) -> String {
    re::BARE_CODE_BLOCK
      .replace_all(html, |captures: &Captures<'_>| {
        self.wrap(&format!("<pre>{}</pre>", &captures["code"]))
      })
      .into_owned()
  }

  pub(crate) fn wrap(&self, block: &str) -> String {
    format!(
      r#"<div class="{CONTAINER_CLASS}">{block}{}</div>"#,
      self.markup
    )
  }
}
