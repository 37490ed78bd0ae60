//! Filter Pills Component
//!
//! Horizontal row of mutually exclusive project filter buttons.

use dioxus::prelude::*;
use portfolio_core::Category;

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Buttons in display order
    pub categories: Vec<Category>,
    /// Currently active category
    pub active: Option<Category>,
    /// Handler called with the clicked button's category
    pub on_select: EventHandler<Category>,
}

/// Button label: the category name with its first letter capitalized
pub fn filter_label(category: &Category) -> String {
    let mut chars = category.as_str().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Single-select filter buttons, `filter-btn` with `active` on the current one
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FilterPills {
///         categories: site.read().filter().buttons().to_vec(),
///         active: site.read().filter().active().cloned(),
///         on_select: move |cat| dispatch(UiEvent::FilterClick(cat)),
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "project-filters",
            role: "radiogroup",
            "aria-label": "Project category",
            for cat in props.categories.iter() {
                {
                    let cat_clone = cat.clone();
                    let is_active = props.active.as_ref() == Some(cat);
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{cat}",
                            class: if is_active { "filter-btn active" } else { "filter-btn" },
                            role: "radio",
                            "aria-checked": if is_active { "true" } else { "false" },
                            "data-filter": "{cat}",
                            onclick: move |_| {
                                on_select.call(cat_clone.clone());
                            },
                            "{filter_label(cat)}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(filter_label(&Category::all()), "All");
        assert_eq!(filter_label(&Category::new("iot")), "Iot");
        assert_eq!(filter_label(&Category::new("embedded")), "Embedded");
    }
}
