use super::request::PaginationRequest;

/// Appends `ORDER BY`, `LIMIT` and `OFFSET` to a base fetch statement.
///
/// Only the request's whitelisted column names and its direction token are
/// written into the SQL; page arithmetic is rendered from integers.
pub(crate) fn decorate(base: &str, request: &PaginationRequest) -> String {
    let mut sql = String::with_capacity(base.len() + 64);
    sql.push_str(base);

    if !request.order_by().is_empty() {
        sql.push_str(" ORDER BY ");
        sql.push_str(&request.order_by().join(", "));
        sql.push(' ');
        sql.push_str(request.order_dir().as_sql());
    }

    sql.push_str(&format!(" LIMIT {} OFFSET {}", request.per_page(), request.offset()));
    sql
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::request::OrderDirection;

    const BASE: &str = "SELECT * FROM blog_posts";

    #[test]
    fn first_page_without_ordering() {
        let sql = decorate(BASE, &PaginationRequest::default());
        assert_eq!(sql, "SELECT * FROM blog_posts LIMIT 10 OFFSET 0");
    }

    #[test]
    fn offset_follows_page() {
        let sql = decorate(BASE, &PaginationRequest::new(3, 10));
        assert!(sql.ends_with("LIMIT 10 OFFSET 20"), "{sql}");
    }

    #[test]
    fn unset_direction_orders_descending() {
        let request = PaginationRequest::new(1, 10)
            .with_order(vec!["title", "id"], OrderDirection::parse(Some("")).unwrap());
        let sql = decorate(BASE, &request);
        assert_eq!(sql, "SELECT * FROM blog_posts ORDER BY title, id DESC LIMIT 10 OFFSET 0");
    }

    #[test]
    fn ascending_direction() {
        let request = PaginationRequest::new(2, 25).with_order(vec!["created_at"], OrderDirection::Asc);
        let sql = decorate(BASE, &request);
        assert_eq!(sql, "SELECT * FROM blog_posts ORDER BY created_at ASC LIMIT 25 OFFSET 25");
    }

    #[test]
    fn direction_without_columns_emits_no_order_by() {
        let request = PaginationRequest::new(1, 10).with_order(Vec::new(), OrderDirection::Asc);
        let sql = decorate(BASE, &request);
        assert!(!sql.contains("ORDER BY"), "{sql}");
        assert!(!sql.contains("ASC"), "{sql}");
    }
}
