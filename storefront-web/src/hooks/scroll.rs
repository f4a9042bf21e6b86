use web_sys::window;

/// Scrolls the page section with the given element id into view.
pub fn scroll_to_section(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    if let Some(element) = element {
        element.scroll_into_view();
    }
}
