use super::model::Post;

/// Query parameter name the service AND-filters posts on.
pub const TAG_PARAM: &str = "tag";

/// Build the repeated `tag=` parameters for `/v1/posts/all`, in input order.
pub fn tag_filter_params(tags: &[String]) -> Vec<(&'static str, String)> {
    tags.iter().map(|tag| (TAG_PARAM, tag.clone())).collect()
}

/// Order posts oldest first.
pub fn sort_by_saved_at(posts: &mut [Post]) {
    posts.sort_by_key(|post| post.saved_at);
}
