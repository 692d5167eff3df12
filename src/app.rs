use dioxus::prelude::*;

use crate::components::Home;
use crate::{FAVICON, TAILWIND_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Title { "NLW Copa" }
        document::Meta { name: "theme-color", content: "#121214" } // gray-900
        document::Meta { name: "color-scheme", content: "dark" }
        // Page container
        div { class: "min-h-screen bg-gray-900 bg-app bg-no-repeat bg-cover",
            PageBoundary { Home {} }
        }
    }
}

/// No partial counters: a failed load replaces the whole page.
#[allow(non_snake_case)]
#[component]
pub fn PageBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_errors: ErrorContext| rsx! {
                div { class: "max-w-[1124px] h-screen mx-auto grid place-items-center text-center text-gray-100",
                    div { class: "space-y-2",
                        p { class: "text-2xl font-bold", "Não foi possível carregar a página." }
                        p { class: "text-sm text-gray-300", "Tente novamente em alguns instantes." }
                    }
                }
            },
            {children}
        }
    }
}
