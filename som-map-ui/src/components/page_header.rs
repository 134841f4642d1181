//! Page and section headings.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    pub title: String,
    /// Rendered as a section heading (h3) instead of the page title (h1).
    #[props(default = false)]
    pub section: bool,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        if props.section {
            h3 {
                style: "margin: 16px 0 8px 0; font-size: 18px;",
                "{props.title}"
            }
        } else {
            h1 {
                style: "margin: 0 0 12px 0; font-size: 28px;",
                "{props.title}"
            }
        }
    }
}
