//! Community forum posts.

use chrono::{Duration, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::community::{ForumError, NewPost, Post, PostCategory};

pub trait ForumRepository: Send + Sync {
    /// Posts newest first, optionally restricted to one board.
    fn list(&self, category: Option<PostCategory>) -> Vec<Post>;

    fn create(&self, post: NewPost) -> Post;

    /// Add one like and return the updated post.
    fn like(&self, id: Uuid) -> Result<Post, ForumError>;
}

#[derive(Default)]
pub struct InMemoryForum {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryForum {
    /// Forum pre-populated with the demo boards.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let seed = |author: &str,
                    location: &str,
                    category: PostCategory,
                    age: Duration,
                    content: &str,
                    likes: u32,
                    comments: u32,
                    has_image: bool| Post {
            id: Uuid::new_v4(),
            author: author.to_string(),
            location: Some(location.to_string()),
            category,
            content: content.to_string(),
            likes,
            comments,
            has_image,
            created_at: now - age,
        };

        let posts = vec![
            seed(
                "Sunita Patil",
                "Pune, Maharashtra",
                PostCategory::Tips,
                Duration::hours(2),
                "I've been using neem oil mixed with a little soap as a natural pesticide for my \
                 vegetable garden. It's working great against aphids and whiteflies! Has anyone \
                 else tried this?",
                24,
                8,
                false,
            ),
            seed(
                "Vijay Kumar",
                "Nagpur, Maharashtra",
                PostCategory::Tips,
                Duration::days(1),
                "Question for wheat farmers: I'm noticing some yellow spots on my wheat leaves. \
                 Could this be a fungal infection or nutrient deficiency? Attaching photos for \
                 reference.",
                18,
                12,
                true,
            ),
            seed(
                "Anita Sharma",
                "Nashik, Maharashtra",
                PostCategory::Tips,
                Duration::days(3),
                "Success story! I increased my tomato yield by 30% this season by using drip \
                 irrigation and mulching. Happy to share more details if anyone is interested.",
                56,
                23,
                false,
            ),
            seed(
                "Rajesh Patel",
                "Amravati, Maharashtra",
                PostCategory::Tools,
                Duration::days(1),
                "I have an extra sprayer that I'm not using anymore. It's in good condition. \
                 Anyone in the Amravati area interested in borrowing or exchanging for other \
                 tools?",
                12,
                5,
                true,
            ),
            seed(
                "Ganesh Mane",
                "Kolhapur, Maharashtra",
                PostCategory::Tools,
                Duration::days(2),
                "Looking to borrow a seed drill for 2-3 days next week. Can offer my rotavator \
                 in exchange or pay reasonable rent.",
                8,
                10,
                false,
            ),
            seed(
                "Priya Desai",
                "Solapur, Maharashtra",
                PostCategory::Tools,
                Duration::days(4),
                "Our farmer group has purchased a mini tractor that members can use on \
                 rotation. If you're in Solapur district and interested in joining our group, \
                 please comment below.",
                32,
                18,
                false,
            ),
            seed(
                "Manoj Jadhav",
                "Aurangabad, Maharashtra",
                PostCategory::Seeds,
                Duration::hours(12),
                "I have extra okra seeds (local variety) from this season's harvest. They've \
                 performed really well in our climate. Happy to share with 5-6 farmers. Let me \
                 know if interested.",
                28,
                15,
                false,
            ),
            seed(
                "Lakshmi Patil",
                "Satara, Maharashtra",
                PostCategory::Seeds,
                Duration::days(3),
                "Looking for drought-resistant wheat varieties for the upcoming season. Anyone \
                 have experience with the new HI-1544 variety? Or have seeds to share?",
                14,
                7,
                false,
            ),
            seed(
                "Suresh Kale",
                "Jalgaon, Maharashtra",
                PostCategory::Seeds,
                Duration::days(5),
                "Seed exchange event happening in Jalgaon on the 15th of this month at the \
                 Krishi Vigyan Kendra. Bring your native seeds to exchange with other farmers. \
                 Let's preserve our traditional varieties!",
                42,
                11,
                true,
            ),
        ];

        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl ForumRepository for InMemoryForum {
    fn list(&self, category: Option<PostCategory>) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .read()
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .cloned()
            .collect();

        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    fn create(&self, post: NewPost) -> Post {
        let post = Post {
            id: Uuid::new_v4(),
            author: post.author,
            location: post.location,
            category: post.category,
            content: post.content,
            likes: 0,
            comments: 0,
            has_image: false,
            created_at: Utc::now(),
        };

        self.posts.write().push(post.clone());
        post
    }

    fn like(&self, id: Uuid) -> Result<Post, ForumError> {
        let mut posts = self.posts.write();
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ForumError::NotFound(id))?;

        post.likes = post.likes.saturating_add(1);
        Ok(post.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(content: &str, category: PostCategory) -> NewPost {
        NewPost {
            author: "Ramesh Singh".into(),
            location: Some("Nashik".into()),
            category,
            content: content.into(),
        }
    }

    #[test]
    fn seeded_forum_has_three_posts_per_board() {
        let forum = InMemoryForum::seeded();
        assert_eq!(forum.list(None).len(), 9);
        for category in [PostCategory::Tips, PostCategory::Tools, PostCategory::Seeds] {
            assert_eq!(forum.list(Some(category)).len(), 3);
        }
    }

    #[test]
    fn list_is_newest_first() {
        let forum = InMemoryForum::seeded();
        let posts = forum.list(None);
        assert!(posts
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn created_post_appears_at_the_top_of_its_board() {
        let forum = InMemoryForum::seeded();
        let created = forum.create(new_post("Mulch saves water", PostCategory::Tips));

        assert_eq!(created.likes, 0);
        let tips = forum.list(Some(PostCategory::Tips));
        assert_eq!(tips[0].id, created.id);
        assert!(forum
            .list(Some(PostCategory::Seeds))
            .iter()
            .all(|p| p.id != created.id));
    }

    #[test]
    fn like_increments_and_unknown_post_fails() {
        let forum = InMemoryForum::default();
        let post = forum.create(new_post("Borrow my sprayer", PostCategory::Tools));

        forum.like(post.id).unwrap();
        let liked = forum.like(post.id).unwrap();
        assert_eq!(liked.likes, 2);

        let missing = Uuid::new_v4();
        assert_eq!(forum.like(missing).unwrap_err(), ForumError::NotFound(missing));
    }
}
