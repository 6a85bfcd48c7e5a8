//! Listing parameters for `ClientRepository::get_clients`.

use models::client;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{Condition, DbBackend};
use serde::Deserialize;

use crate::pagination::{Pagination, SortDirection};

/// Columns a client listing can be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientSortField {
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    CreatedAt,
}

impl ClientSortField {
    /// Used when `sortBy` is empty or not recognised.
    pub const DEFAULT: Self = Self::LastName;

    /// Accepts camelCase or snake_case, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s.trim().chars().filter(|c| *c != '_').collect::<String>().to_ascii_lowercase();
        match key.as_str() {
            "id" | "clientid" => Some(Self::Id),
            "firstname" => Some(Self::FirstName),
            "lastname" => Some(Self::LastName),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "createdat" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    pub fn column(self) -> client::Column {
        match self {
            Self::Id => client::Column::Id,
            Self::FirstName => client::Column::FirstName,
            Self::LastName => client::Column::LastName,
            Self::Email => client::Column::Email,
            Self::Phone => client::Column::Phone,
            Self::CreatedAt => client::Column::CreatedAt,
        }
    }
}

/// Query string of `GET /api/clients`; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientQuery {
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

impl ClientQuery {
    pub fn pagination(&self) -> Pagination {
        let d = Pagination::default();
        Pagination { page: self.page.unwrap_or(d.page), per_page: self.page_size.unwrap_or(d.per_page) }
    }

    /// Resolved sort field and whether the requested one was recognised.
    pub fn sort_field(&self) -> (ClientSortField, bool) {
        match self.sort_by.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => (ClientSortField::DEFAULT, true),
            Some(s) => match ClientSortField::parse(s) {
                Some(f) => (f, true),
                None => (ClientSortField::DEFAULT, false),
            },
        }
    }

    pub fn direction(&self) -> SortDirection {
        self.direction.as_deref().map(SortDirection::parse).unwrap_or_default()
    }

    /// Trimmed search text, `None` when blank.
    pub fn search(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

const SEARCHABLE: [client::Column; 4] = [
    client::Column::FirstName,
    client::Column::LastName,
    client::Column::Email,
    client::Column::Phone,
];

/// `LIKE` wildcards in user input match literally.
pub fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') { out.push('\\'); }
        out.push(c);
    }
    out
}

/// Fold `q` the way the backend's `LOWER()` folds column values: SQLite only
/// touches ASCII letters, Postgres folds the full Unicode range.
pub fn fold_case(q: &str, backend: DbBackend) -> String {
    match backend {
        DbBackend::Sqlite => q.to_ascii_lowercase(),
        _ => q.to_lowercase(),
    }
}

/// Case-insensitive substring match over the searchable columns.
pub fn search_condition(q: &str, backend: DbBackend) -> Condition {
    let pattern = format!("%{}%", escape_like(&fold_case(q, backend)));
    SEARCHABLE.into_iter().fold(Condition::any(), |cond, col| {
        cond.add(Expr::expr(Func::lower(Expr::col((client::Entity, col)))).like(LikeExpr::new(pattern.clone()).escape('\\')))
    })
}
