use crate::components::{Button, ButtonVariant};
use crate::hooks::use_storefront;
use dioxus::prelude::*;
use storefront::Package;

/// Groups digits in threes, e.g. `22500` → `22 500`.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[component]
pub fn PackageCard(package: Package) -> Element {
    let mut store = use_storefront();
    let labels = store.labels();
    let discounted = store.applied_promo().is_some();
    let final_price = store.price_of(&package);
    let selected = store.selected_package() == Some(package.id);

    let border_class = if package.popular {
        "border-2 border-purple-500 glow-effect"
    } else if selected {
        "border-2 border-yellow-400"
    } else {
        "border border-gray-700"
    };

    rsx! {
        div { class: "relative bg-gray-800 rounded-xl p-6 hover-scale {border_class}",
            if package.popular {
                span { class: "absolute -top-3 left-1/2 -translate-x-1/2 px-3 py-1 bg-purple-600 text-white rounded-full text-xs font-medium",
                    "⭐ Popular"
                }
            }

            div { class: "text-center mb-4",
                div { class: "text-5xl mb-2", "💎" }
                h3 { class: "text-3xl font-bold text-gray-100 mb-2", "{format_amount(package.amount)}" }
                if package.has_bonus() {
                    span { class: "inline-block px-3 py-1 bg-yellow-400 text-gray-900 rounded-full text-xs font-medium mb-2",
                        "+{package.bonus} bonus"
                    }
                }
                div { class: "text-2xl font-bold text-purple-400 mb-1",
                    if discounted {
                        span { class: "line-through text-gray-500 text-lg mr-2", "{labels.price(package.price)}" }
                    }
                    "{labels.price(final_price)}"
                }
                if package.has_bonus() {
                    p { class: "text-sm text-gray-400",
                        "Total: {format_amount(package.total_amount())} {labels.currency_name}"
                    }
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                large: true,
                class: "w-full",
                onclick: move |_| store.purchase(&package),
                "🛒 Buy"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(400), "400");
        assert_eq!(format_amount(1700), "1 700");
        assert_eq!(format_amount(22500), "22 500");
        assert_eq!(format_amount(1_000_000), "1 000 000");
    }
}
