use super::*;

/// How anchor ids are derived from heading text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnchorStyle {
  /// Derive a lowercase, dash-separated slug.
  Slug,
  /// Use the flattened heading text as-is, spaces and punctuation included.
  #[default]
  Verbatim,
}

#[derive(Debug, Clone)]
pub struct ProcessorOptions {
  pub anchor_style: AnchorStyle,
  pub auto_detect_languages: Vec<String>,
  pub code_selector: String,
  pub copy_button: Option<CopyButtonStrategy>,
  pub copy_button_label: String,
  pub heading_selector: String,
  pub highlighted_class: String,
  pub inline_script: bool,
}

impl Default for ProcessorOptions {
  fn default() -> Self {
    Self {
      anchor_style: AnchorStyle::default(),
      auto_detect_languages: [
        "rs", "py", "js", "go", "java", "rb", "php", "c", "cpp", "cs", "sh",
        "sql", "css", "html", "json", "yaml",
      ]
      .into_iter()
      .map(str::to_string)
      .collect(),
      code_selector: "pre code".to_string(),
      copy_button: Some(CopyButtonStrategy::Tree),
      copy_button_label: "コードをクリップボードにコピー".to_string(),
      heading_selector: "h2".to_string(),
      highlighted_class: "hljs".to_string(),
      inline_script: false,
    }
  }
}

impl ProcessorOptions {
  #[must_use]
  pub fn builder() -> ProcessorOptionsBuilder {
    ProcessorOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct ProcessorOptionsBuilder {
  inner: ProcessorOptions,
}

impl ProcessorOptionsBuilder {
  #[must_use]
  pub fn anchor_style(self, anchor_style: AnchorStyle) -> Self {
    Self {
      inner: ProcessorOptions {
        anchor_style,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn auto_detect_languages<I, S>(self, languages: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: ProcessorOptions {
        auto_detect_languages: languages.into_iter().map(Into::into).collect(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> ProcessorOptions {
    self.inner
  }

  #[must_use]
  pub fn code_selector(self, code_selector: impl Into<String>) -> Self {
    Self {
      inner: ProcessorOptions {
        code_selector: code_selector.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn copy_button(self, copy_button: Option<CopyButtonStrategy>) -> Self {
    Self {
      inner: ProcessorOptions {
        copy_button,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn copy_button_label(self, label: impl Into<String>) -> Self {
    Self {
      inner: ProcessorOptions {
        copy_button_label: label.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn heading_selector(self, heading_selector: impl Into<String>) -> Self {
    Self {
      inner: ProcessorOptions {
        heading_selector: heading_selector.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn highlighted_class(self, highlighted_class: impl Into<String>) -> Self {
    Self {
      inner: ProcessorOptions {
        highlighted_class: highlighted_class.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn inline_script(self, inline_script: bool) -> Self {
    Self {
      inner: ProcessorOptions {
        inline_script,
        ..self.inner
      },
    }
  }
}
