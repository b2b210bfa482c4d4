// src/utils/pagination.rs

/// A 1-indexed page request over a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: i64,
    pub per_page: i64,
}

impl Page {
    /// Parses the raw `page` query value. Missing or non-integer input falls
    /// back to the first page.
    pub fn from_query(raw: Option<&str>, per_page: i64) -> Self {
        let number = raw
            .and_then(|value| value.trim().parse::<i64>().ok())
            .unwrap_or(1);

        Self { number, per_page }
    }

    /// `(limit, offset)` for the page, or `None` when the page lies before
    /// the first row and must be empty.
    pub fn window(&self) -> Option<(i64, i64)> {
        if self.number < 1 || self.per_page < 1 {
            return None;
        }

        let offset = (self.number - 1).checked_mul(self.per_page)?;
        Some((self.per_page, offset))
    }
}
