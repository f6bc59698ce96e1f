pub(crate) mod blog_categories;
pub(crate) mod blog_posts;
pub(crate) mod health;
