use leptos::prelude::*;

/// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
fn variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

#[component]
pub fn Badge(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let full_class = move || {
        format!(
            "badge {} {}",
            variant_class(variant.get().as_deref()),
            class.get().unwrap_or_default()
        )
    };

    view! {
        <span class=full_class>
            {children()}
        </span>
    }
}
