use ratatui::widgets::ListState;
use uuid::Uuid;

use crate::model::{Comment, Post, PostAuthor};
use crate::services::PostService;
use crate::state::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFocus {
    Posts,
    ComposerText,
    ComposerMedia,
    CommentInput,
}

/// State management for the home feed.
pub struct FeedState {
    pub posts: Vec<Post>,
    pub list_state: ListState,
    pub focus: FeedFocus,

    // Composer popup
    pub composer_open: bool,
    pub composer_text: String,
    pub composer_media: String,

    // Inline comment input
    pub comment_target: Option<Uuid>,
    pub comment_input: String,
}

impl FeedState {
    pub fn new(posts: Vec<Post>) -> Self {
        let mut list_state = ListState::default();
        if !posts.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            posts,
            list_state,
            focus: FeedFocus::Posts,
            composer_open: false,
            composer_text: String::new(),
            composer_media: String::new(),
            comment_target: None,
            comment_input: String::new(),
        }
    }

    pub fn cursor_post_id(&self) -> Option<Uuid> {
        self.list_state
            .selected()
            .and_then(|idx| self.posts.get(idx))
            .map(|p| p.id)
    }

    pub fn open_composer(&mut self) {
        self.composer_open = true;
        self.composer_text.clear();
        self.composer_media.clear();
        self.focus = FeedFocus::ComposerText;
    }

    pub fn close_composer(&mut self) {
        self.composer_open = false;
        self.focus = FeedFocus::Posts;
    }

    /// Prepend a new post. Blank text is a validation failure and leaves the
    /// collection untouched.
    pub fn create_post(
        &mut self,
        author: PostAuthor,
        text: &str,
        media: Option<&str>,
        timestamp: i64,
    ) -> AppResult<()> {
        let body = PostService::validate_post_text(text).map_err(AppError::Validation)?;
        let post = Post {
            id: Uuid::new_v4(),
            author,
            body,
            media: media.and_then(PostService::classify_media),
            timestamp,
            likes: 0,
            user_liked: false,
            comments: Vec::new(),
        };
        self.posts.insert(0, post);
        self.list_state.select(Some(0));
        Ok(())
    }

    /// Flip the current user's like on a post. The decrement only fires when
    /// the flag was set, so the count cannot go negative. Unknown ids no-op.
    pub fn toggle_like(&mut self, post_id: Uuid) {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
            if post.user_liked {
                post.likes -= 1;
            } else {
                post.likes += 1;
            }
            post.user_liked = !post.user_liked;
        }
    }

    /// Append a comment to a post. Blank text and unknown ids are silent
    /// no-ops. Returns the new comment's id when one was added.
    pub fn add_comment(
        &mut self,
        post_id: Uuid,
        author: PostAuthor,
        text: &str,
        timestamp: i64,
    ) -> Option<Uuid> {
        if text.trim().is_empty() {
            return None;
        }
        let post = self.posts.iter_mut().find(|p| p.id == post_id)?;
        let comment = Comment {
            id: Uuid::new_v4(),
            author,
            body: text.trim().to_string(),
            timestamp,
        };
        let id = comment.id;
        post.comments.push(comment);
        Some(id)
    }

    pub fn open_comment_input(&mut self, post_id: Uuid) {
        self.comment_target = Some(post_id);
        self.comment_input.clear();
        self.focus = FeedFocus::CommentInput;
    }

    pub fn close_comment_input(&mut self) {
        self.comment_target = None;
        self.comment_input.clear();
        self.focus = FeedFocus::Posts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_posts;
    use crate::model::Media;

    fn me() -> PostAuthor {
        PostAuthor {
            name: "Student Name".to_string(),
            avatar: "ST".to_string(),
        }
    }

    #[test]
    fn blank_posts_are_rejected_without_mutation() {
        let mut feed = FeedState::new(seed_posts());
        let before = feed.posts.len();
        assert!(feed.create_post(me(), "", None, 0).is_err());
        assert!(feed.create_post(me(), "   ", None, 0).is_err());
        assert_eq!(feed.posts.len(), before);
    }

    #[test]
    fn new_posts_are_prepended_with_zero_likes() {
        let mut feed = FeedState::new(seed_posts());
        feed.create_post(me(), "hello campus", None, 42).unwrap();
        let post = &feed.posts[0];
        assert_eq!(post.body, "hello campus");
        assert_eq!(post.likes, 0);
        assert!(!post.user_liked);
        assert!(post.comments.is_empty());
    }

    #[test]
    fn media_is_classified_by_video_substring() {
        let mut feed = FeedState::new(vec![]);
        feed.create_post(me(), "clip", Some("https://example.com/video/demo.mp4"), 0)
            .unwrap();
        feed.create_post(me(), "pic", Some("https://example.com/photo.png"), 0)
            .unwrap();
        assert!(matches!(feed.posts[1].media, Some(Media::Video(_))));
        assert!(matches!(feed.posts[0].media, Some(Media::Image(_))));
    }

    #[test]
    fn toggle_like_is_its_own_inverse() {
        let mut feed = FeedState::new(seed_posts());
        let id = feed.posts[0].id;
        let (likes, flag) = (feed.posts[0].likes, feed.posts[0].user_liked);
        feed.toggle_like(id);
        feed.toggle_like(id);
        assert_eq!(feed.posts[0].likes, likes);
        assert_eq!(feed.posts[0].user_liked, flag);
    }

    #[test]
    fn unliking_a_liked_post_decrements() {
        let mut feed = FeedState::new(seed_posts());
        // seed post 2 starts liked by the current user
        let id = feed.posts[1].id;
        let likes = feed.posts[1].likes;
        feed.toggle_like(id);
        assert_eq!(feed.posts[1].likes, likes - 1);
        assert!(!feed.posts[1].user_liked);
    }

    #[test]
    fn toggle_like_on_unknown_id_is_a_noop() {
        let mut feed = FeedState::new(seed_posts());
        let likes: Vec<u32> = feed.posts.iter().map(|p| p.likes).collect();
        feed.toggle_like(Uuid::new_v4());
        let after: Vec<u32> = feed.posts.iter().map(|p| p.likes).collect();
        assert_eq!(likes, after);
    }

    #[test]
    fn add_comment_touches_exactly_one_post() {
        let mut feed = FeedState::new(seed_posts());
        let id = feed.posts[2].id;
        let counts: Vec<usize> = feed.posts.iter().map(|p| p.comments.len()).collect();
        let comment_id = feed.add_comment(id, me(), "what time?", 0);
        assert!(comment_id.is_some());
        for (i, post) in feed.posts.iter().enumerate() {
            let expected = if post.id == id { counts[i] + 1 } else { counts[i] };
            assert_eq!(post.comments.len(), expected);
        }
    }

    #[test]
    fn blank_comments_and_unknown_ids_are_noops() {
        let mut feed = FeedState::new(seed_posts());
        let id = feed.posts[0].id;
        assert!(feed.add_comment(id, me(), "   ", 0).is_none());
        assert!(feed.add_comment(Uuid::new_v4(), me(), "hi", 0).is_none());
        assert_eq!(feed.posts[0].comments.len(), 1);
    }
}
