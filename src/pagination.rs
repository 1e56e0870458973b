use serde::Serialize;

/// Pages kept visible on each side of the current page.
const WINDOW: usize = 2;

/// Page numbers to render; `None` marks a gap.
///
/// Always keeps the first and last page and a window around `current`.
fn page_links(total_pages: usize, current: usize) -> Vec<Option<usize>> {
    let mut links = Vec::new();
    let mut previous = 0;

    for page in 1..=total_pages {
        let near_current = page.abs_diff(current) <= WINDOW;
        if page == 1 || page == total_pages || near_current {
            if page > previous + 1 {
                links.push(None);
            }
            links.push(Some(page));
            previous = page;
        }
    }

    links
}

/// One page of an in-memory list plus the links needed to render a pager.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Cuts page `page` (1-based) out of `items`.
    ///
    /// Page 0 is treated as 1, pages past the end as the last page and
    /// `per_page == 0` as "everything on one page".
    pub fn from_items(items: Vec<T>, page: usize, per_page: usize) -> Self {
        let per_page = if per_page == 0 {
            items.len().max(1)
        } else {
            per_page
        };
        let total_pages = items.len().div_ceil(per_page);
        let page = page.clamp(1, total_pages.max(1));

        let items = items
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Self {
            items,
            pages: page_links(total_pages, page),
            page,
            total_pages,
        }
    }
}
