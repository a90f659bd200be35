//! Client-side paging for the shipment grid.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

/// Number of pages needed for `len` rows. Always at least one.
#[must_use]
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Keep `page` inside `0..page_count(len, page_size)`.
#[must_use]
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.min(page_count(len, page_size) - 1)
}

/// Rows shown on `page` (zero-based). Out-of-range pages show the last page.
#[must_use]
pub fn page_slice<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return rows;
    }
    let page = clamp_page(page, rows.len(), page_size);
    let start = page * page_size;
    let end = (start + page_size).min(rows.len());
    &rows[start.min(end)..end]
}

/// Footer label, e.g. `"11–20 of 23"`.
#[must_use]
pub fn range_label(len: usize, page: usize, page_size: usize) -> String {
    if len == 0 {
        return "0–0 of 0".to_owned();
    }
    if page_size == 0 {
        return format!("1–{len} of {len}");
    }
    let page = clamp_page(page, len, page_size);
    let first = page * page_size + 1;
    let last = ((page + 1) * page_size).min(len);
    format!("{first}–{last} of {len}")
}
