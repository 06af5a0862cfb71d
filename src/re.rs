use {super::*, regex::Regex};

pub(crate) static BARE_CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?s)<pre>(?P<code><code(?:\s[^>]*)?>.*?</code>)</pre>")
    .unwrap()
});

pub(crate) static DASH_RUNS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

pub(crate) static WHITESPACE_RUNS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\s+").unwrap());
