use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CopyButtons {
  None,
  Template,
  Tree,
}

impl From<CopyButtons> for Option<CopyButtonStrategy> {
  fn from(value: CopyButtons) -> Self {
    match value {
      CopyButtons::None => None,
      CopyButtons::Template => Some(CopyButtonStrategy::Template),
      CopyButtons::Tree => Some(CopyButtonStrategy::Tree),
    }
  }
}

#[derive(Parser)]
#[command(name = "article-html")]
#[command(
  about = "Add heading anchors, syntax highlighting and copy buttons to article HTML",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    value_enum,
    default_value_t = CopyButtons::Tree,
    help = "How copy buttons are attached to code blocks"
  )]
  copy_buttons: CopyButtons,
  #[arg(
    long,
    default_value = "h2",
    help = "Selector for headings that get anchors"
  )]
  heading_selector: String,
  #[arg(long, help = "Append the copy button script to the output")]
  inline_script: bool,
  #[arg(
    value_name = "FILE",
    help = "HTML fragment to process, or an article listing with --slug"
  )]
  input: PathBuf,
  #[arg(long, help = "Print the headings and HTML as JSON")]
  json: bool,
  #[arg(long, value_name = "SLUG", help = "Process the article with this slug")]
  slug: Option<String>,
  #[arg(long, help = "Derive anchor ids by slugging heading text")]
  slugify: bool,
}

impl Arguments {
  fn load(&self) -> Result<String> {
    let Some(slug) = &self.slug else {
      return fs::read_to_string(&self.input).with_context(|| {
        format!("failed to read file from `{}`", self.input.display())
      });
    };

    let source = JsonArticleSource::from_path(&self.input)
      .context("failed to load article listing")?;

    let Some(article) = source.article_by_slug(slug)? else {
      bail!("no article with slug `{slug}`");
    };

    Ok(article.contents)
  }

  fn options(&self) -> ProcessorOptions {
    ProcessorOptions::builder()
      .anchor_style(if self.slugify {
        AnchorStyle::Slug
      } else {
        AnchorStyle::Verbatim
      })
      .copy_button(self.copy_buttons.into())
      .heading_selector(self.heading_selector.as_str())
      .inline_script(self.inline_script)
      .build()
  }

  pub(crate) fn run(self) -> Result {
    let html = self.load()?;

    let processor = Processor::new(self.options())
      .context("failed to configure processor")?;

    let content = processor.process(&html);

    if self.json {
      println!("{}", serde_json::to_string_pretty(&content)?);
    } else {
      println!("{}", content.html);
    }

    Ok(())
  }
}
