use dioxus::prelude::*;

use crate::utils::format::format_count;

const CHECK_ICON: Asset = asset!("/assets/check.svg");

#[allow(non_snake_case)]
#[component]
pub fn CounterStat(value: u64, label: String) -> Element {
    rsx! {
        div { class: "flex items-center gap-6",
            img { src: CHECK_ICON, alt: "" }
            div { class: "flex flex-col",
                span { class: "font-bold text-2xl", "{format_count(value)}" }
                span { "{label}" }
            }
        }
    }
}
