//! The loaded, read-only set of posts

use indexmap::IndexMap;

use super::Post;

/// All posts keyed by identifier, newest first
#[derive(Debug, Clone, Default)]
pub struct ContentCollection {
    posts: IndexMap<String, Post>,
}

impl ContentCollection {
    /// Build a collection; on duplicate identifiers the first post wins
    pub fn new(posts: Vec<Post>) -> Self {
        let mut map: IndexMap<String, Post> = IndexMap::with_capacity(posts.len());

        for post in posts {
            if let Some(existing) = map.get(&post.id) {
                tracing::warn!(
                    "Duplicate post id {:?}: keeping {:?}, skipping {:?}",
                    post.id,
                    existing.full_source,
                    post.full_source
                );
                continue;
            }
            map.insert(post.id.clone(), post);
        }

        map.sort_by(|_, a, _, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));

        Self { posts: map }
    }

    /// Look up a post by identifier
    pub fn find(&self, id: &str) -> Option<&Post> {
        self.posts.get(id)
    }

    /// All posts, newest first
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.values()
    }

    /// All identifiers, newest first
    pub fn identifiers(&self) -> Vec<String> {
        self.posts.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
