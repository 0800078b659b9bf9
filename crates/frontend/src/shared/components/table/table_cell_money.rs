//! Right-aligned table cell for amounts.

use super::number_format::format_amount;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,

    /// ISO currency code, "VND" unless the row says otherwise
    #[prop(optional, into, default = "VND".to_string())]
    currency: String,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) => format_amount(v, &currency),
        None => "—".to_string(),
    };

    let cell_style = move || {
        let mut styles = vec!["font-variant-numeric: tabular-nums"];
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>
                {formatted_text}
            </span>
        </TableCell>
    }
}
