use serde::Deserialize;

pub const DISCUSSION_BASE_URL: &str = "https://news.ycombinator.com/item?id=";

/// List of news items selected for one digest email
pub type Digest = Vec<DigestItem>;

/// One page of search results from the API
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<JsonNewsItem>,
}

/// A raw story hit as the search API returns it
#[derive(Debug, Deserialize)]
pub struct JsonNewsItem {
    title: Option<String>,
    url: Option<String>,
    points: Option<i64>,
    author: Option<String>,
    num_comments: Option<i64>,
    #[serde(rename = "objectID")]
    object_id: String,
}

/// A normalized story ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestItem {
    pub title: String,
    pub url: Option<String>,
    pub points: i64,
    pub author: String,
    pub num_comments: i64,
    pub object_id: String,
}

impl From<JsonNewsItem> for DigestItem {
    fn from(item: JsonNewsItem) -> Self {
        Self {
            title: item
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| String::from("No Title")),
            url: item.url.filter(|u| !u.is_empty()),
            points: item.points.unwrap_or(0),
            author: item.author.unwrap_or_else(|| String::from("unknown")),
            num_comments: item.num_comments.unwrap_or(0),
            object_id: item.object_id,
        }
    }
}

impl DigestItem {
    /// Link to the story's comment thread on the source site.
    #[must_use]
    pub fn discussion_link(&self) -> String {
        format!("{DISCUSSION_BASE_URL}{}", self.object_id)
    }

    /// Link the rendered title points at. Text-only posts have no external
    /// URL, so the discussion thread stands in.
    #[must_use]
    pub fn primary_link(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => self.discussion_link(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{DigestItem, JsonNewsItem};

    #[test]
    fn test_sparse_hit_gets_defaults() {
        let raw: JsonNewsItem =
            serde_json::from_str(r#"{"objectID": "42"}"#).unwrap();
        let item = DigestItem::from(raw);

        assert_eq!(item.title, "No Title");
        assert_eq!(item.url, None);
        assert_eq!(item.points, 0);
        assert_eq!(item.author, "unknown");
        assert_eq!(item.num_comments, 0);
        assert_eq!(item.object_id, "42");
    }

    #[test]
    fn test_primary_link_prefers_story_url() {
        let raw: JsonNewsItem = serde_json::from_str(
            r#"{"objectID": "42", "url": "https://example.com/post"}"#,
        )
        .unwrap();
        let item = DigestItem::from(raw);
        assert_eq!(item.primary_link(), "https://example.com/post");
    }

    #[test]
    fn test_primary_link_falls_back_to_discussion() {
        let raw: JsonNewsItem = serde_json::from_str(
            r#"{"objectID": "123", "title": "Ask HN: text-only post", "url": ""}"#,
        )
        .unwrap();
        let item = DigestItem::from(raw);
        assert_eq!(
            item.primary_link(),
            "https://news.ycombinator.com/item?id=123",
        );
    }
}
