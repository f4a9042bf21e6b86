use crate::components::{Button, ButtonVariant};
use crate::hooks::use_storefront;
use dioxus::prelude::*;

#[component]
pub fn PromoForm() -> Element {
    let mut store = use_storefront();
    let applied = store.applied_promo();
    let input = store.promo_input();
    let hint = store.promo_hint().join(", ");

    rsx! {
        div { class: "max-w-md mx-auto mb-12",
            div { class: "bg-gray-800/80 backdrop-blur rounded-xl p-6 border-2 border-yellow-400/50",
                div { class: "flex items-center gap-2 mb-4",
                    span { class: "text-2xl", "🏷️" }
                    h3 { class: "text-xl font-bold text-gray-100", "Have a promo code?" }
                }

                if let Some(promo) = applied {
                    div { class: "mb-4 p-3 bg-green-500/20 rounded-lg border border-green-500/40 flex items-center justify-between",
                        p { class: "text-sm font-bold text-green-400",
                            "✓ Promo code {promo.code} is active! {promo.discount} off"
                        }
                        button {
                            class: "text-xs text-gray-400 hover:text-gray-200",
                            onclick: move |_| store.clear_promo(),
                            "Remove"
                        }
                    }
                }

                div { class: "flex gap-2",
                    input {
                        class: "flex-1 p-3 bg-gray-900/50 border border-gray-600 rounded-lg focus:ring-2 focus:ring-yellow-400 text-gray-100 placeholder-gray-400",
                        placeholder: "Enter promo code",
                        value: "{input}",
                        oninput: move |evt| store.set_promo_input(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                store.apply_promo();
                            }
                        },
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| store.apply_promo(),
                        "Apply"
                    }
                }

                if !hint.is_empty() {
                    p { class: "text-xs text-gray-400 mt-3", "Try: {hint}" }
                }
            }
        }
    }
}
