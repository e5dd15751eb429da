//! Data Table
//!
//! Column-driven table. Each column maps a record to a cell view; cells are
//! derived from the record and never mutate it.

use std::sync::Arc;

use leptos::prelude::*;

type CellFn<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// One table column: header text plus a cell renderer
pub struct Column<T> {
    header: &'static str,
    centered: bool,
    cell: CellFn<T>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header,
            centered: self.centered,
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> Column<T> {
    pub fn new<V>(header: &'static str, cell: impl Fn(&T) -> V + Send + Sync + 'static) -> Self
    where
        V: IntoView + 'static,
    {
        Self {
            header,
            centered: false,
            cell: Arc::new(move |row| cell(row).into_any()),
        }
    }

    /// Plain text column
    pub fn text(header: &'static str, value: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self::new(header, move |row| value(row))
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    fn class(&self) -> &'static str {
        if self.centered { "text-center" } else { "" }
    }
}

/// Striped table with an optional leading `#` column
#[component]
pub fn DataTable<T>(
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    #[prop(optional)] numbered: bool,
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let head = columns
        .iter()
        .map(|col| view! { <th class=col.class()>{col.header}</th> })
        .collect_view();

    let body = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let cells = columns
                .iter()
                .map(|col| view! { <td class=col.class()>{(col.cell)(row)}</td> })
                .collect_view();
            view! {
                <tr>
                    {numbered.then(|| view! { <td class="text-center">{index + 1}</td> })}
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="table-responsive">
            <table class="table table-striped table-bordered table-hover mb-0">
                <thead>
                    <tr>
                        {numbered.then(|| view! { <th class="text-center">"#"</th> })}
                        {head}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
