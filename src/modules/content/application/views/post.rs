// src/modules/content/application/views/post.rs

use serde::Serialize;

use crate::modules::content::application::format;
use crate::modules::content::domain::documents::{Post, RichTextBlock};

pub const EMPTY_POSTS: &str =
    "No blog posts found. Blog posts will appear here once they are published in the content studio.";
pub const EMPTY_RECENT_POSTS: &str = "No blog posts yet.";
pub const DEFAULT_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCardView {
    pub title: String,
    pub slug: String,
    /// "January 5, 2024"
    pub published_on: String,
    pub categories: Vec<String>,
}

impl PostCardView {
    pub fn from_store(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.current.clone(),
            published_on: format::long_datetime(post.published_at),
            categories: category_titles(post),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDetailView {
    pub title: String,
    pub slug: String,
    pub author: String,
    pub published_on: String,
    pub categories: Vec<String>,
    pub body: Vec<RichTextBlock>,
}

impl PostDetailView {
    pub fn from_store(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.current.clone(),
            author: post
                .author
                .as_ref()
                .map(|a| a.name.clone())
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            published_on: format::long_datetime(post.published_at),
            categories: category_titles(post),
            body: post.body.clone(),
        }
    }
}

fn category_titles(post: &Post) -> Vec<String> {
    post.categories
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|c| c.title.clone())
        .collect()
}
