use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static CATALOGUE: Lazy<Vec<BlogPost>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../data/posts.json")).unwrap_or_else(|e| {
        log::error!("Failed to parse bundled blog posts: {}", e);
        Vec::new()
    })
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub author: String,
    pub date: NaiveDate,
    pub image: String,
}

impl BlogPost {
    /// e.g. "Aug 12, 2025"
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    pub fn href(&self) -> String {
        format!("/blog/{}", self.id)
    }
}

pub fn catalogue() -> &'static [BlogPost] {
    &CATALOGUE
}

/// Looks up a post by the raw id segment of `/blog/{id}`.
pub fn find(id: &str) -> Option<&'static BlogPost> {
    let id: u32 = id.parse().ok()?;
    catalogue().iter().find(|post| post.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalogue_parses() {
        let posts = catalogue();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].author, "Jane Doe");
        assert_eq!(posts[0].display_date(), "Aug 12, 2025");
        assert_eq!(posts[2].display_date(), "Aug 8, 2025");
    }

    #[test]
    fn find_by_path_segment() {
        assert_eq!(find("2").map(|post| post.author.as_str()), Some("John Smith"));
        assert_eq!(find("99"), None);
        assert_eq!(find("abc"), None);
        assert_eq!(find("2").map(BlogPost::href).as_deref(), Some("/blog/2"));
    }
}
