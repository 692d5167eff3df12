use dioxus::prelude::*;

use crate::api::get_home_counts;
use crate::browser::{AlertNotifier, ServerPoolCreator, SystemClipboard};
use crate::components::CounterStat;
use crate::shared::pool_form::{submit_pool, PoolForm};
use crate::shared::types::HomeCounts;
use crate::utils::format::format_count;

const LOGO: Asset = asset!("/assets/logo.svg");
const USERS_AVATAR: Asset = asset!("/assets/users-avatar.svg");
const APP_PREVIEW: Asset = asset!("/assets/app-preview.svg");

/// Aborts the render so the surrounding `ErrorBoundary` replaces the page.
pub fn load_failed(e: &ServerFnError) -> RenderError {
    RenderError::Aborted(dioxus::CapturedError::from_display(e.to_string()))
}

#[allow(non_snake_case)]
#[component]
pub fn Home() -> Element {
    // ssr data (server waits); a failed load aborts the render
    let counts = use_server_future(get_home_counts)?;
    let counts = match &*counts.read_unchecked() {
        Some(Ok(c)) => *c,
        Some(Err(e)) => return Err(load_failed(e)),
        // Only occurs on client-side navigations (not on first SSR render)
        None => {
            return rsx! {
                div { class: "max-w-[1124px] h-screen mx-auto grid place-items-center",
                    div { class: "animate-pulse h-9 w-64 bg-gray-800 rounded" }
                }
            }
        }
    };

    rsx! { HomeView { counts } }
}

#[allow(non_snake_case)]
#[component]
pub fn HomeView(counts: HomeCounts) -> Element {
    let mut form = use_signal(PoolForm::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let title = form.read().title.clone();
        spawn(async move {
            let outcome =
                submit_pool(&title, &ServerPoolCreator, &SystemClipboard, &AlertNotifier).await;
            form.write().apply(&outcome);
        });
    };

    rsx! {
        div { class: "max-w-[1124px] h-screen mx-auto grid grid-cols-2 gap-28 items-center",
            main {
                img { src: LOGO, alt: "NLW Copa" }
                h1 { class: "mt-14 text-white text-5xl font-bold leading-tight",
                    "Crie seu próprio bolão da copa e compartilhe entre amigos!"
                }
                div { class: "mt-10 flex items-center gap-2",
                    img { src: USERS_AVATAR, alt: "" }
                    strong { class: "text-gray-100 text-xl",
                        span { class: "text-green-500", "{format_count(counts.users_count)}" }
                        " pessoas já estão usando"
                    }
                }

                form { class: "mt-10 flex gap-2", onsubmit: on_submit,
                    input {
                        r#type: "text",
                        required: true,
                        placeholder: "Qual nome do seu bolão?",
                        class: "flex-1 px-6 py-4 rounded bg-gray-800 border border-gray-600 text-sm text-gray-100",
                        value: "{form.read().title}",
                        oninput: move |evt| form.write().set_title(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "bg-yellow-500 px-6 py-4 rounded text-gray-900 font-bold text-sm uppercase hover:bg-yellow-700",
                        "Criar meu bolão"
                    }
                }

                p { class: "mt-4 text-sm text-gray-300 leading-relaxed",
                    "Após criar seu bolão, você receberá um código único que poderá usar para convidar outras pessoas 🚀"
                }

                div { class: "mt-10 pt-10 border-t border-gray-600 flex items-center justify-between text-gray-100",
                    CounterStat { value: counts.polls_count, label: "Bolões criados".to_string() }
                    div { class: "w-px h-14 bg-gray-600" }
                    CounterStat { value: counts.guesses_count, label: "Palpites enviados".to_string() }
                }
            }
            img {
                src: APP_PREVIEW,
                alt: "Dois celulares exibindo uma prévia da aplicação móvel do NLW Copa",
            }
        }
    }
}
