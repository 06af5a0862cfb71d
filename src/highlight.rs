use super::*;

static SYNTAX_SET: LazyLock<SyntaxSet> =
  LazyLock::new(SyntaxSet::load_defaults_newlines);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeCategory {
  Invalid,
  Keyword,
  Storage,
  Structural,
  Token,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Highlighted {
  /// `None` when even plain-text rendering failed, in which case the block
  /// keeps its original text.
  pub(crate) html: Option<String>,
  pub(crate) language: String,
}

/// Class-based syntax highlighter with best-guess language detection.
///
/// Explicit languages are resolved by file extension or name. When a
/// language is unknown or fails to highlight, detection takes over: the
/// first line is checked for a shebang or modeline, then every candidate
/// grammar parses the code and the one with the highest relevance wins.
#[derive(Debug)]
pub(crate) struct Highlighter {
  candidates: Vec<&'static SyntaxReference>,
}

impl Highlighter {
  fn detect(&self, code: &str) -> &'static SyntaxReference {
    if let Some(syntax) = SYNTAX_SET.find_syntax_by_first_line(code) {
      return syntax;
    }

    let mut best: Option<(&'static SyntaxReference, usize)> = None;

    for &syntax in &self.candidates {
      let Some(relevance) = Self::relevance(code, syntax) else {
        continue;
      };

      if relevance > best.map_or(0, |(_, score)| score) {
        best = Some((syntax, relevance));
      }
    }

    best.map_or_else(
      || SYNTAX_SET.find_syntax_plain_text(),
      |(syntax, _)| syntax,
    )
  }

  pub(crate) fn highlight(
    &self,
    code: &str,
    language: Option<&str>,
  ) -> Highlighted {
    if let Some(language) = language {
      match SYNTAX_SET.find_syntax_by_token(language) {
        Some(syntax) => match Self::render(code, syntax) {
          Ok(html) => {
            return Highlighted {
              html: Some(html),
              language: syntax.name.clone(),
            };
          }
          Err(error) => {
            tracing::debug!(
              language,
              %error,
              "highlighting failed, falling back to detection"
            );
          }
        },
        None => {
          tracing::debug!(
            language,
            "unknown language, falling back to detection"
          );
        }
      }
    }

    self.highlight_auto(code)
  }

  fn highlight_auto(&self, code: &str) -> Highlighted {
    let syntax = self.detect(code);

    let html = Self::render(code, syntax)
      .or_else(|error| {
        tracing::debug!(
          language = syntax.name.as_str(),
          %error,
          "detected language failed, rendering as plain text"
        );

        Self::render(code, SYNTAX_SET.find_syntax_plain_text())
      })
      .map_err(|error| {
        tracing::warn!(%error, "plain text rendering failed");
      })
      .ok();

    Highlighted {
      html,
      language: syntax.name.clone(),
    }
  }

  pub(crate) fn new(languages: &[String]) -> Result<Self> {
    let candidates = languages
      .iter()
      .map(|token| {
        SYNTAX_SET
          .find_syntax_by_token(token)
          .ok_or_else(|| Error::UnknownLanguage(token.clone()))
      })
      .collect::<Result<Vec<_>>>()?;

    Ok(Self { candidates })
  }

  /// Scores how well a grammar understands the code.
  ///
  /// Structural scopes (`meta`, `source`, `text`, `punctuation`) and plain
  /// identifiers (`variable.other`) are pushed by most grammars for any
  /// input and score nothing. Keywords score three, storage modifiers two and
  /// every other pushed scope one. A grammar that marks any part of the code
  /// `invalid` is rejected.
  fn relevance(code: &str, syntax: &SyntaxReference) -> Option<usize> {
    let mut state = ParseState::new(syntax);

    let mut score = 0;

    for line in LinesWithEndings::from(code) {
      let ops = state.parse_line(line, &SYNTAX_SET).ok()?;

      for (_, op) in ops {
        let ScopeStackOp::Push(scope) = op else {
          continue;
        };

        score += match Self::scope_category(&scope.build_string()) {
          ScopeCategory::Invalid => return None,
          ScopeCategory::Keyword => 3,
          ScopeCategory::Storage => 2,
          ScopeCategory::Structural => 0,
          ScopeCategory::Token => 1,
        };
      }
    }

    Some(score)
  }

  fn scope_category(scope: &str) -> ScopeCategory {
    let root = scope.split('.').next().unwrap_or_default();

    match root {
      "invalid" => ScopeCategory::Invalid,
      "meta" | "punctuation" | "source" | "text" => ScopeCategory::Structural,
      "variable" if scope.starts_with("variable.other") => {
        ScopeCategory::Structural
      }
      "keyword" if !scope.starts_with("keyword.operator") => {
        ScopeCategory::Keyword
      }
      "storage" => ScopeCategory::Storage,
      _ => ScopeCategory::Token,
    }
  }

  fn render(
    code: &str,
    syntax: &SyntaxReference,
  ) -> Result<String, syntect::Error> {
    let mut generator = ClassedHTMLGenerator::new_with_class_style(
      syntax,
      &SYNTAX_SET,
      ClassStyle::Spaced,
    );

    for line in LinesWithEndings::from(code) {
      generator.parse_html_for_line_which_includes_newline(line)?;
    }

    Ok(generator.finalize())
  }
}
