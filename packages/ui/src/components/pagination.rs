use dioxus::prelude::*;

/// Page numbers to render: the current page plus up to two neighbors each
/// side, clamped to the valid range. Empty when there is a single page.
pub fn page_window(current: u32, total_pages: u32) -> Vec<u32> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let last = total_pages - 1;
    let start = current.saturating_sub(2);
    let end = (current + 2).min(last);
    (start..=end).collect()
}

#[component]
pub fn Pagination(page: u32, total_pages: u32, onchange: EventHandler<u32>) -> Element {
    let window = page_window(page, total_pages);
    if window.is_empty() {
        return rsx! {};
    }

    rsx! {
        nav {
            class: "pagination",
            button {
                class: "page-btn",
                disabled: page == 0,
                onclick: move |_| onchange.call(page - 1),
                "‹"
            }
            for p in window {
                button {
                    key: "{p}",
                    class: if p == page { "page-btn page-current" } else { "page-btn" },
                    onclick: move |_| onchange.call(p),
                    "{p + 1}"
                }
            }
            button {
                class: "page-btn",
                disabled: page + 1 >= total_pages,
                onclick: move |_| onchange.call(page + 1),
                "›"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_renders_nothing() {
        assert!(page_window(0, 0).is_empty());
        assert!(page_window(0, 1).is_empty());
    }

    #[test]
    fn test_window_clamps_at_start() {
        assert_eq!(page_window(0, 10), vec![0, 1, 2]);
        assert_eq!(page_window(1, 10), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_window_centers_mid_range() {
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_window_clamps_at_end() {
        assert_eq!(page_window(9, 10), vec![7, 8, 9]);
    }
}
