//! Generic table rendering: a column schema applied to a row collection.

use dioxus::prelude::*;

/// Horizontal alignment hint for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

impl Align {
    pub fn class(&self) -> &'static str {
        match self {
            Align::Left => "cell-left",
            Align::Right => "cell-right",
        }
    }
}

/// Column descriptor: a header label plus a renderer applied to each row
#[derive(Clone)]
pub struct Column<T: Clone + PartialEq + 'static> {
    pub key: &'static str,
    pub header: &'static str,
    pub align: Align,
    pub render: fn(&T) -> Element,
}

// Schema identity is the key/header/align triple; renderers are addressed
// by `key` and never compared.
impl<T: Clone + PartialEq + 'static> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.header == other.header && self.align == other.align
    }
}

impl<T: Clone + PartialEq + 'static> Column<T> {
    pub fn new(key: &'static str, header: &'static str, render: fn(&T) -> Element) -> Self {
        Self {
            key,
            header,
            align: Align::Left,
            render,
        }
    }

    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }
}

/// Render an ordered row collection through a column schema: one `tr` per
/// row with one `td` per column, in schema order. The caller owns
/// filtering and ordering. An empty collection renders the caller-supplied
/// message instead of a table; absence of data is not an error.
#[component]
pub fn DataTable<T: Clone + PartialEq + 'static>(
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    empty_message: String,
) -> Element {
    if rows.is_empty() {
        return rsx! {
            div { class: "table-empty", "{empty_message}" }
        };
    }
    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    for col in columns.iter() {
                        th { key: "{col.key}", class: "{col.align.class()}", "{col.header}" }
                    }
                }
            }
            tbody {
                for (i, row) in rows.iter().enumerate() {
                    tr { key: "{i}",
                        for col in columns.iter() {
                            td { key: "{col.key}", class: "{col.align.class()}", {(col.render)(row)} }
                        }
                    }
                }
            }
        }
    }
}

/// Placeholder for a collection with nothing in it yet
#[component]
pub fn EmptyState(title: String, description: String, action: Option<Element>) -> Element {
    rsx! {
        div { class: "empty-state",
            p { class: "empty-title", "{title}" }
            p { class: "empty-description", "{description}" }
            if let Some(action) = action {
                div { class: "empty-action", {action} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq)]
    struct Row {
        name: &'static str,
        count: u64,
    }

    fn schema() -> Vec<Column<Row>> {
        vec![
            Column::new("name", "Name", |r: &Row| rsx! { span { "{r.name}" } }),
            Column::new("count", "Count", |r: &Row| rsx! { span { "{r.count}" } }).right(),
        ]
    }

    fn render(rows: Vec<Row>) -> String {
        dioxus_ssr::render_element(rsx! {
            DataTable {
                columns: schema(),
                rows,
                empty_message: "nothing here".to_string(),
            }
        })
    }

    #[test]
    fn renders_one_row_per_item_and_one_cell_per_column() {
        let html = render(vec![
            Row { name: "alpha", count: 1 },
            Row { name: "beta", count: 2 },
            Row { name: "gamma", count: 3 },
        ]);
        assert_eq!(html.matches("<th").count(), 2);
        assert_eq!(html.matches("<tr").count(), 4); // header + 3 rows
        assert_eq!(html.matches("<td").count(), 6);
    }

    #[test]
    fn cells_follow_schema_order() {
        let html = render(vec![Row { name: "alpha", count: 7 }]);
        let name_pos = html.find("alpha").unwrap();
        let count_pos = html.find('7').unwrap();
        assert!(name_pos < count_pos);
    }

    #[test]
    fn alignment_hint_reaches_the_cell_class() {
        let html = render(vec![Row { name: "alpha", count: 7 }]);
        assert!(html.contains("cell-right"));
    }

    #[test]
    fn empty_collection_renders_single_message_and_no_table() {
        let html = render(Vec::new());
        assert_eq!(html.matches("nothing here").count(), 1);
        assert!(!html.contains("<table"));
    }

    #[test]
    fn empty_state_shows_optional_action() {
        let html = dioxus_ssr::render_element(rsx! {
            EmptyState {
                title: "No functions yet".to_string(),
                description: "Create your first serverless function".to_string(),
                action: rsx! { button { "Create" } },
            }
        });
        assert!(html.contains("No functions yet"));
        assert!(html.contains("<button"));
    }
}
