use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    onclick: EventHandler<MouseEvent>,
    children: Element,
    #[props(default = false)] large: bool,
    #[props(default, into)] class: String,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => "bg-gradient-to-r from-purple-500 to-pink-600 text-white hover:from-purple-600 hover:to-pink-700 shadow-lg hover:shadow-xl",
        ButtonVariant::Secondary => "bg-yellow-400 text-gray-900 hover:bg-yellow-300",
        ButtonVariant::Outline => "border border-gray-500 text-gray-100 hover:bg-gray-700",
    };
    let size_class = if large { "px-8 py-3 text-lg" } else { "px-4 py-2" };

    rsx! {
        button {
            class: "inline-flex items-center justify-center gap-2 rounded-lg font-medium transition-all {variant_class} {size_class} {class}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
