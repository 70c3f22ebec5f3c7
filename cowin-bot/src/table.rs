//! Projection of provider records into a boxed text table and its HTML wrapping.

use serde_json::Value;

/// One projected column: JSON key read from each record and the header shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
}

impl Column {
    pub const fn new(key: &'static str, header: &'static str) -> Self {
        Self { key, header }
    }
}

pub const STATE_COLUMNS: &[Column] = &[
    Column::new("state_id", "State ID"),
    Column::new("state_name", "State Name"),
];

pub const DISTRICT_COLUMNS: &[Column] = &[
    Column::new("district_id", "District ID"),
    Column::new("district_name", "District Name"),
];

/// Session columns; headers are the keys verbatim.
pub const SLOT_COLUMNS: &[Column] = &[
    Column::new("name", "name"),
    Column::new("vaccine", "vaccine"),
    Column::new("slots", "slots"),
    Column::new("min_age_limit", "min_age_limit"),
    Column::new("available_capacity", "available_capacity"),
];

/// Telegram's per-message text limit, in characters.
pub const TEXT_CHUNK_LIMIT: usize = 4096;

/// Header row plus data rows, all cells already stringified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Projects `records` onto `columns`, keeping record order.
    pub fn project(columns: &[Column], records: &[Value]) -> Self {
        let headers = columns.iter().map(|c| c.header.to_string()).collect();
        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|c| cell_text(record.get(c.key)))
                    .collect()
            })
            .collect();
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Boxed fixed-width rendering:
    ///
    /// ```text
    /// +------+---------+
    /// | name | vaccine |
    /// +------+---------+
    /// | X    | COVAXIN |
    /// +------+---------+
    /// ```
    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = self.header_block(&widths);
        for row in &self.rows {
            out.push_str(&row_line(row, &widths));
        }
        if !self.rows.is_empty() {
            out.push_str(&border_line(&widths));
        }
        out
    }

    /// Rendered table inside `<pre>` for Telegram's HTML parse mode.
    pub fn to_html(&self) -> String {
        format!("<pre>{}</pre>", escape_html(&self.render()))
    }

    /// Like [`Table::to_html`] but split on whole rows into `<pre>` blocks of at most `limit`
    /// characters, each repeating the header. Column widths are shared by every block.
    ///
    /// A single row longer than the limit still gets its own block.
    pub fn to_html_chunks(&self, limit: usize) -> Vec<String> {
        let widths = self.widths();
        let head = escape_html(&self.header_block(&widths));
        let border = escape_html(&border_line(&widths));
        let frame = PRE_OPEN.len() + PRE_CLOSE.len() + head.chars().count() + border.chars().count();

        let mut chunks = Vec::new();
        let mut body = String::new();
        let mut body_len = 0;
        for row in &self.rows {
            let line = escape_html(&row_line(row, &widths));
            let line_len = line.chars().count();
            if body_len > 0 && frame + body_len + line_len > limit {
                chunks.push(wrap_pre(&head, &body, &border));
                body.clear();
                body_len = 0;
            }
            body.push_str(&line);
            body_len += line_len;
        }
        if body_len > 0 {
            chunks.push(wrap_pre(&head, &body, &border));
        } else {
            chunks.push(format!("{}{}{}", PRE_OPEN, head, PRE_CLOSE));
        }
        chunks
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn header_block(&self, widths: &[usize]) -> String {
        let border = border_line(widths);
        format!("{}{}{}", border, row_line(&self.headers, widths), border)
    }
}

const PRE_OPEN: &str = "<pre>";
const PRE_CLOSE: &str = "</pre>";

fn wrap_pre(head: &str, body: &str, border: &str) -> String {
    format!("{}{}{}{}{}", PRE_OPEN, head, body, border, PRE_CLOSE)
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let pad = w.saturating_sub(cell.chars().count());
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 1));
        line.push('|');
    }
    line.push('\n');
    line
}

/// Stringifies one JSON value for a cell. Missing and `null` become `-`.
pub fn cell_text(value: Option<&Value>) -> String {
    let text = match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => {
            let parts: Vec<String> = items.iter().map(|v| cell_text(Some(v))).collect();
            format!("[{}]", parts.join(", "))
        }
        Some(other) => other.to_string(),
    };
    // Line breaks would tear the box apart.
    text.replace(['\r', '\n'], " ")
}

/// Escapes `&`, `<`, `>` for Telegram HTML.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}
