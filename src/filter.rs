// Search criteria and their translation to a parameterized predicate

use chrono::NaiveDate;

/// Sentinel fuente value meaning "no source constraint".
///
/// Search UIs offer it as the first entry of the source selector; the
/// builder treats it the same as an absent fuente.
pub const ALL_SOURCES: &str = "(todas)";

/// Columns scanned by the free-text search, in bind order.
const TEXT_COLUMNS: [&str; 12] = [
    "tema",
    "nombre",
    "apellido",
    "email",
    "compania",
    "tel_trabajo",
    "tel_movil",
    "ciudad",
    "estado",
    "pais",
    "notas",
    "web",
];

/// Transient search criteria for selecting leads.
///
/// Constructed fresh per search action; never persisted. The default
/// value matches every row.
#[derive(Debug, Clone, Default)]
pub struct LeadFilter {
    /// Substring matched OR-wise across the twelve text columns.
    pub text: Option<String>,
    /// Exact fuente match; `None`, empty, or [`ALL_SOURCES`] means no constraint.
    pub fuente: Option<String>,
    /// Inclusive lower bound on `created_at` (start of day).
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on `created_at` (end of day).
    pub to: Option<NaiveDate>,
}

impl LeadFilter {
    /// Translate the criteria into a WHERE fragment and its bound values.
    ///
    /// Returns the fragment without the `WHERE` keyword (empty when no
    /// condition is active) and the values in bind order. User text is
    /// always bound, never interpolated. LIKE matching follows SQLite's
    /// default (ASCII case-insensitive), and `%`/`_` in the search text
    /// are passed through unescaped.
    pub fn to_sql(&self) -> (String, Vec<String>) {
        let mut conditions: Vec<String> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(text) = self.text.as_deref().map(str::trim)
            && !text.is_empty()
        {
            let like = format!("%{}%", text);
            let clause = TEXT_COLUMNS
                .iter()
                .map(|col| format!("{} LIKE ?", col))
                .collect::<Vec<_>>()
                .join(" OR ");
            conditions.push(format!("({})", clause));
            params.extend(vec![like; TEXT_COLUMNS.len()]);
        }

        if let Some(fuente) = self.fuente.as_deref()
            && !fuente.is_empty()
            && fuente != ALL_SOURCES
        {
            conditions.push("fuente = ?".to_string());
            params.push(fuente.to_string());
        }

        if let Some(from) = self.from {
            conditions.push("created_at >= ?".to_string());
            params.push(format!("{} 00:00:00", from.format("%Y-%m-%d")));
        }

        if let Some(to) = self.to {
            conditions.push("created_at <= ?".to_string());
            params.push(format!("{} 23:59:59", to.format("%Y-%m-%d")));
        }

        (conditions.join(" AND "), params)
    }
}
