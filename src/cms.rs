use super::*;

/// An article as delivered by the CMS content API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
  #[serde(rename = "_id")]
  pub id: String,
  pub title: String,
  pub slug: String,
  /// Rich-text body, raw HTML.
  #[serde(rename = "contents2", alias = "contents", default)]
  pub contents: String,
  pub author: Author,
  #[serde(default)]
  pub tags: Vec<Tag>,
  #[serde(default)]
  pub cover_image: Option<Image>,
  #[serde(rename = "_sys")]
  pub sys: Sys,
}

impl Article {
  pub(crate) fn has_any_tag(&self, tag_ids: &[String]) -> bool {
    self.tags.iter().any(|tag| tag_ids.contains(&tag.id))
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
  #[serde(rename = "_id")]
  pub id: String,
  pub full_name: String,
  pub slug: String,
  #[serde(default)]
  pub biography: String,
  #[serde(default)]
  pub profile_image: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
  pub src: String,
  #[serde(default)]
  pub alt_text: Option<String>,
  #[serde(default)]
  pub width: Option<u32>,
  #[serde(default)]
  pub height: Option<u32>,
}

/// System timestamps, RFC 3339 strings as sent by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sys {
  pub created_at: String,
  pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
  #[serde(rename = "_id")]
  pub id: String,
  pub name: String,
  pub slug: String,
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn deserializes_api_shape() {
    let article: Article = serde_json::from_str(
      r#"{
        "_id": "a1",
        "title": "Hello",
        "slug": "hello",
        "contents2": "<h2>Hi</h2>",
        "author": {
          "_id": "u1",
          "fullName": "Sam Doe",
          "slug": "sam",
          "profileImage": { "src": "https://cdn.example/sam.png" }
        },
        "tags": [{ "_id": "t1", "name": "Rust", "slug": "rust" }],
        "_sys": {
          "createdAt": "2024-01-02T03:04:05.000Z",
          "updatedAt": "2024-02-03T04:05:06.000Z"
        }
      }"#,
    )
    .unwrap();

    assert_eq!(article.contents, "<h2>Hi</h2>");
    assert_eq!(article.author.full_name, "Sam Doe");
    assert_eq!(article.author.biography, "");
    assert_eq!(
      article.author.profile_image.map(|image| image.src),
      Some("https://cdn.example/sam.png".to_string())
    );
    assert_eq!(article.tags[0].name, "Rust");
    assert_eq!(article.cover_image, None);
    assert_eq!(article.sys.created_at, "2024-01-02T03:04:05.000Z");
  }

  #[test]
  fn tag_membership() {
    let article: Article = serde_json::from_str(
      r#"{
        "_id": "a1",
        "title": "Hello",
        "slug": "hello",
        "author": { "_id": "u1", "fullName": "Sam", "slug": "sam" },
        "tags": [{ "_id": "t1", "name": "Rust", "slug": "rust" }],
        "_sys": { "createdAt": "x", "updatedAt": "y" }
      }"#,
    )
    .unwrap();

    assert!(article.has_any_tag(&["t0".to_string(), "t1".to_string()]));
    assert!(!article.has_any_tag(&["t2".to_string()]));
    assert!(!article.has_any_tag(&[]));
  }
}
