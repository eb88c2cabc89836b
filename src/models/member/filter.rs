use serde::Deserialize;

use super::types::MemberStatus;

/// Search box + status tab of the member list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberFilter {
    pub q: Option<String>,
    pub status: Option<MemberStatus>,
}

/// Raw query string of the list page and `GET /api/members`.
#[derive(Debug, Default, Deserialize)]
pub struct MemberListQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl MemberListQuery {
    pub fn filter(&self) -> MemberFilter {
        MemberFilter {
            q: self
                .q
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            status: self.status.as_deref().and_then(MemberStatus::parse),
        }
    }

    pub fn sort(&self) -> SortSpec {
        SortSpec::from_params(self.sort.as_deref(), self.dir.as_deref())
    }
}

impl MemberFilter {
    pub fn is_empty(&self) -> bool {
        self.q.is_none() && self.status.is_none()
    }

    /// WHERE clause (without the keyword) and its bind values, in order.
    /// The clause only ever contains fixed SQL; user text travels as binds.
    pub fn where_clause(&self) -> (String, Vec<String>) {
        let mut parts = vec![];
        let mut binds = vec![];
        if let Some(q) = &self.q {
            let needle = format!("%{}%", escape_like(&q.to_lowercase()));
            parts.push(
                "(LOWER(first_name || ' ' || last_name) LIKE ? ESCAPE '\\' \
                 OR phone LIKE ? ESCAPE '\\' \
                 OR LOWER(email) LIKE ? ESCAPE '\\')"
                    .to_string(),
            );
            binds.push(needle.clone());
            binds.push(format!("%{}%", escape_like(q)));
            binds.push(needle);
        }
        if let Some(status) = self.status {
            parts.push("status = ?".to_string());
            binds.push(status.as_str().to_string());
        }
        if parts.is_empty() {
            ("1=1".to_string(), binds)
        } else {
            (parts.join(" AND "), binds)
        }
    }

    /// Query string (without `?`) that reproduces this filter; used for pagination links.
    pub fn query_string(&self) -> String {
        let mut pairs = vec![];
        if let Some(q) = &self.q {
            pairs.push(("q", q.as_str()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str()));
        }
        serde_urlencoded::to_string(pairs).unwrap_or_default()
    }
}

fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SortDir { Asc, #[default] Desc }

#[derive(Debug, Clone, Default)]
pub struct SortSpec {
    pub column: String,
    pub dir: SortDir,
}

impl SortSpec {
    pub fn from_params(sort: Option<&str>, dir: Option<&str>) -> Self {
        SortSpec {
            column: sort.unwrap_or("").to_string(),
            dir: if dir == Some("asc") { SortDir::Asc } else { SortDir::Desc },
        }
    }
    pub fn dir_str(&self) -> &'static str {
        match self.dir { SortDir::Asc => "asc", SortDir::Desc => "desc" }
    }
    pub fn sql_dir(&self) -> &'static str {
        match self.dir { SortDir::Asc => "ASC", SortDir::Desc => "DESC" }
    }
    pub fn toggle_dir(&self) -> &'static str {
        match self.dir { SortDir::Asc => "desc", SortDir::Desc => "asc" }
    }
}

/// Allowed sort column keys and their SQL expressions.
pub fn sort_col(key: &str) -> &'static str {
    match key {
        "name"     => "LOWER(last_name || ' ' || first_name)",
        "status"   => "status",
        "region"   => "region",
        "ministry" => "ministry",
        _          => "created_at",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        let (clause, binds) = MemberFilter::default().where_clause();
        assert_eq!(clause, "1=1");
        assert!(binds.is_empty());
    }

    #[test]
    fn search_binds_three_patterns_and_escapes_wildcards() {
        let filter = MemberFilter { q: Some("Ama_50%".into()), status: Some(MemberStatus::Approved) };
        let (clause, binds) = filter.where_clause();
        assert!(clause.ends_with("AND status = ?"));
        assert_eq!(binds, vec![
            "%ama\\_50\\%%".to_string(),
            "%Ama\\_50\\%%".to_string(),
            "%ama\\_50\\%%".to_string(),
            "approved".to_string(),
        ]);
    }

    #[test]
    fn list_query_ignores_blank_search_and_unknown_status() {
        let query = MemberListQuery { q: Some("   ".into()), status: Some("archived".into()), ..Default::default() };
        assert!(query.filter().is_empty());
    }

    #[test]
    fn query_string_is_url_encoded() {
        let filter = MemberFilter { q: Some("Ama M".into()), status: Some(MemberStatus::Pending) };
        assert_eq!(filter.query_string(), "q=Ama+M&status=pending");
    }

    #[test]
    fn unknown_sort_key_falls_back_to_created_at() {
        assert_eq!(sort_col("password"), "created_at");
        assert_eq!(SortSpec::default().sql_dir(), "DESC");
    }
}
