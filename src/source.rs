use super::*;

/// Read access to published articles.
///
/// Sources are constructed explicitly and handed to whatever renders pages;
/// nothing in this crate holds a global client.
pub trait ArticleSource {
  fn article_by_slug(&self, slug: &str) -> Result<Option<Article>>;

  fn author_by_slug(&self, slug: &str) -> Result<Option<Author>>;

  /// Every author, in listing order.
  fn authors(&self) -> Result<Vec<Author>>;

  /// Articles on the page described by `pagination`, in source order.
  fn articles(&self, pagination: &Pagination) -> Result<Vec<Article>>;

  /// Related articles: those sharing at least one tag with `tag_ids`,
  /// excluding the article `exclude_id`, at most `limit` of them.
  fn articles_by_tags(
    &self,
    tag_ids: &[String],
    exclude_id: &str,
    limit: usize,
  ) -> Result<Vec<Article>>;

  /// Articles whose title contains `keyword`, ignoring case.
  fn search(&self, keyword: &str) -> Result<Vec<Article>>;

  fn tag_by_slug(&self, slug: &str) -> Result<Option<Tag>>;

  /// Every tag, in listing order.
  fn tags(&self) -> Result<Vec<Tag>>;

  fn total(&self) -> Result<usize>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Listing {
  Items { items: Vec<Article> },
  Bare(Vec<Article>),
}

/// An [`ArticleSource`] over an exported content listing, either the API's
/// `{ "items": [...] }` response or a bare array of articles.
///
/// Authors and tags are collected from the articles, first occurrence
/// wins. Use [`JsonArticleSource::with_authors`] and
/// [`JsonArticleSource::with_tags`] when separate listings are exported,
/// e.g. to include authors who have not published yet.
#[derive(Debug, Clone, Default)]
pub struct JsonArticleSource {
  articles: Vec<Article>,
  authors: Vec<Author>,
  tags: Vec<Tag>,
}

impl JsonArticleSource {
  pub fn from_json(json: &str) -> Result<Self> {
    let articles = match serde_json::from_str(json)? {
      Listing::Items { items } => items,
      Listing::Bare(articles) => articles,
    };

    Ok(Self::new(articles))
  }

  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();

    let json = fs::read_to_string(path).map_err(|source| Error::Io {
      path: path.display().to_string(),
      source,
    })?;

    Self::from_json(&json)
  }

  #[must_use]
  pub fn new(articles: Vec<Article>) -> Self {
    let mut seen = HashSet::new();

    let authors = articles
      .iter()
      .map(|article| &article.author)
      .filter(|author| seen.insert(author.id.clone()))
      .cloned()
      .collect();

    seen.clear();

    let tags = articles
      .iter()
      .flat_map(|article| &article.tags)
      .filter(|tag| seen.insert(tag.id.clone()))
      .cloned()
      .collect();

    Self {
      articles,
      authors,
      tags,
    }
  }

  #[must_use]
  pub fn with_authors(self, authors: Vec<Author>) -> Self {
    Self { authors, ..self }
  }

  #[must_use]
  pub fn with_tags(self, tags: Vec<Tag>) -> Self {
    Self { tags, ..self }
  }
}

impl ArticleSource for JsonArticleSource {
  fn article_by_slug(&self, slug: &str) -> Result<Option<Article>> {
    Ok(
      self
        .articles
        .iter()
        .find(|article| article.slug == slug)
        .cloned(),
    )
  }

  fn author_by_slug(&self, slug: &str) -> Result<Option<Author>> {
    Ok(
      self
        .authors
        .iter()
        .find(|author| author.slug == slug)
        .cloned(),
    )
  }

  fn authors(&self) -> Result<Vec<Author>> {
    Ok(self.authors.clone())
  }

  fn articles(&self, pagination: &Pagination) -> Result<Vec<Article>> {
    Ok(
      self
        .articles
        .iter()
        .skip(pagination.skip())
        .take(pagination.limit())
        .cloned()
        .collect(),
    )
  }

  fn articles_by_tags(
    &self,
    tag_ids: &[String],
    exclude_id: &str,
    limit: usize,
  ) -> Result<Vec<Article>> {
    Ok(
      self
        .articles
        .iter()
        .filter(|article| article.id != exclude_id)
        .filter(|article| article.has_any_tag(tag_ids))
        .take(limit)
        .cloned()
        .collect(),
    )
  }

  fn search(&self, keyword: &str) -> Result<Vec<Article>> {
    let keyword = keyword.trim().to_lowercase();

    Ok(
      self
        .articles
        .iter()
        .filter(|article| article.title.to_lowercase().contains(&keyword))
        .cloned()
        .collect(),
    )
  }

  fn tag_by_slug(&self, slug: &str) -> Result<Option<Tag>> {
    Ok(self.tags.iter().find(|tag| tag.slug == slug).cloned())
  }

  fn tags(&self) -> Result<Vec<Tag>> {
    Ok(self.tags.clone())
  }

  fn total(&self) -> Result<usize> {
    Ok(self.articles.len())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn article(id: &str, title: &str, tags: &[&str]) -> serde_json::Value {
    authored(id, title, tags, "u1")
  }

  fn authored(
    id: &str,
    title: &str,
    tags: &[&str],
    author: &str,
  ) -> serde_json::Value {
    serde_json::json!({
      "_id": id,
      "title": title,
      "slug": title.to_lowercase().replace(' ', "-"),
      "contents2": format!("<h2>{title}</h2>"),
      "author": { "_id": author, "fullName": author, "slug": author },
      "tags": tags
        .iter()
        .map(|tag| serde_json::json!({ "_id": tag, "name": tag, "slug": tag }))
        .collect::<Vec<_>>(),
      "_sys": { "createdAt": "2024-01-01", "updatedAt": "2024-01-01" }
    })
  }

  fn source() -> JsonArticleSource {
    let listing = serde_json::json!({
      "items": [
        article("a1", "Intro to Rust", &["rust"]),
        article("a2", "Async Rust", &["rust", "async"]),
        article("a3", "Cooking Pasta", &["food"]),
        article("a4", "Tokio Internals", &["async"]),
      ]
    });

    JsonArticleSource::from_json(&listing.to_string()).unwrap()
  }

  fn ids(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(|article| article.id.as_str()).collect()
  }

  #[test]
  fn finds_article_by_slug() {
    let source = source();

    let article = source.article_by_slug("async-rust").unwrap().unwrap();

    assert_eq!(article.id, "a2");
    assert_eq!(article.contents, "<h2>Async Rust</h2>");
    assert_eq!(source.article_by_slug("missing").unwrap(), None);
  }

  #[test]
  fn pages_through_articles() {
    let source = source();

    let pagination = Pagination::new(2, source.total().unwrap(), 3).unwrap();

    assert_eq!(ids(&source.articles(&pagination).unwrap()), vec!["a4"]);
  }

  #[test]
  fn related_articles_exclude_current() {
    let source = source();

    let related = source
      .articles_by_tags(&["rust".to_string(), "async".to_string()], "a2", 10)
      .unwrap();

    assert_eq!(ids(&related), vec!["a1", "a4"]);
  }

  #[test]
  fn related_articles_respect_limit() {
    let related = source()
      .articles_by_tags(&["rust".to_string(), "async".to_string()], "", 2)
      .unwrap();

    assert_eq!(ids(&related), vec!["a1", "a2"]);
  }

  #[test]
  fn search_matches_titles_case_insensitively() {
    let source = source();

    assert_eq!(ids(&source.search("RUST").unwrap()), vec!["a1", "a2"]);
    assert_eq!(source.search("").unwrap().len(), 4);
    assert!(source.search("python").unwrap().is_empty());
  }

  #[test]
  fn authors_are_collected_once_in_listing_order() {
    let listing = serde_json::json!([
      authored("a1", "One", &[], "kai"),
      authored("a2", "Two", &[], "ren"),
      authored("a3", "Three", &[], "kai"),
    ]);

    let source = JsonArticleSource::from_json(&listing.to_string()).unwrap();

    let slugs = source
      .authors()
      .unwrap()
      .into_iter()
      .map(|author| author.slug)
      .collect::<Vec<_>>();

    assert_eq!(slugs, vec!["kai", "ren"]);
    assert_eq!(source.author_by_slug("ren").unwrap().unwrap().id, "ren");
    assert_eq!(source.author_by_slug("nobody").unwrap(), None);
  }

  #[test]
  fn tags_are_collected_once_in_listing_order() {
    let source = source();

    let slugs = source
      .tags()
      .unwrap()
      .into_iter()
      .map(|tag| tag.slug)
      .collect::<Vec<_>>();

    assert_eq!(slugs, vec!["rust", "async", "food"]);
    assert_eq!(source.tag_by_slug("food").unwrap().unwrap().name, "food");
    assert_eq!(source.tag_by_slug("python").unwrap(), None);
  }

  #[test]
  fn separate_listings_replace_collected_ones() {
    let authors: Vec<Author> = serde_json::from_value(serde_json::json!([
      { "_id": "u9", "fullName": "New Writer", "slug": "new-writer" }
    ]))
    .unwrap();

    let tags: Vec<Tag> = serde_json::from_value(serde_json::json!([
      { "_id": "t9", "name": "Unused", "slug": "unused" }
    ]))
    .unwrap();

    let source = source().with_authors(authors).with_tags(tags);

    assert_eq!(source.authors().unwrap().len(), 1);
    assert_eq!(
      source.author_by_slug("new-writer").unwrap().unwrap().full_name,
      "New Writer"
    );
    assert_eq!(source.tag_by_slug("rust").unwrap(), None);
    assert_eq!(source.tag_by_slug("unused").unwrap().unwrap().id, "t9");
  }

  #[test]
  fn accepts_bare_array() {
    let listing = serde_json::json!([article("a1", "One", &[])]);

    let source = JsonArticleSource::from_json(&listing.to_string()).unwrap();

    assert_eq!(source.total().unwrap(), 1);
  }

  #[test]
  fn rejects_malformed_json() {
    assert!(matches!(
      JsonArticleSource::from_json("{\"items\": 3}"),
      Err(Error::Json { .. })
    ));
  }

  #[test]
  fn missing_file_reports_path() {
    let error =
      JsonArticleSource::from_path("does/not/exist.json").unwrap_err();

    assert!(error.to_string().contains("does/not/exist.json"));
  }
}
