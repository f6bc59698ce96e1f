use sqlx::FromRow;
use time::PrimitiveDateTime;

/// One row of `blog_posts`.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct BlogPost {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

/// One row of `blog_categories`.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct BlogCategory {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}
