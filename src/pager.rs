// src/pager.rs
//! Page window math for the data table.
//!
//! Pages are 1-indexed. The control strip is forward-looking only: the
//! current page plus up to two ahead, then `…` and the last page when the
//! run stops short of it. There is no jump back other than Previous.

use std::{fmt, ops::Range};

use crate::config::consts::PAGE_SIZE;

/// One entry of the pagination control strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageControl {
    Page(usize),
    Ellipsis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    len: usize,
}

impl Default for Pager {
    fn default() -> Self { Self::new(0) }
}

impl Pager {
    pub fn new(len: usize) -> Self {
        Self { current: 1, len }
    }

    /// Collection size changed (new data arrived). The current page is kept
    /// if it still exists, otherwise clamped to the last page.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        let total = self.total_pages();
        if total > 0 && self.current > total {
            self.current = total;
        }
    }

    pub fn reset(&mut self) { self.current = 1; }

    #[inline] pub fn len(&self) -> usize { self.len }
    #[inline] pub fn is_empty(&self) -> bool { self.len == 0 }
    #[inline] pub fn current(&self) -> usize { self.current }

    pub fn total_pages(&self) -> usize {
        self.len.div_ceil(PAGE_SIZE)
    }

    /// Jump to page `n`. Out-of-range requests are ignored; returns whether
    /// the page changed hands.
    pub fn go_to(&mut self, n: usize) -> bool {
        if n >= 1 && n <= self.total_pages() {
            self.current = n;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(n) => self.go_to(n),
            None => false,
        }
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current + 1)
    }

    /// Previous is disabled exactly on page 1.
    pub fn has_prev(&self) -> bool { self.current != 1 }

    /// Next is disabled exactly on the last page.
    pub fn has_next(&self) -> bool { self.current != self.total_pages() }

    /// Index range of the current page window, clipped to the collection.
    pub fn window(&self) -> Range<usize> {
        let start = (self.current - 1) * PAGE_SIZE;
        let start = start.min(self.len);
        let end = (start + PAGE_SIZE).min(self.len);
        start..end
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Range { start, end } = self.window();
        let end = end.min(items.len());
        &items[start.min(end)..end]
    }

    pub fn controls(&self) -> Vec<PageControl> {
        let total = self.total_pages();
        let upper = (self.current + 2).min(total);

        let mut out: Vec<PageControl> = (self.current..=upper).map(PageControl::Page).collect();
        if upper < total {
            out.push(PageControl::Ellipsis);
            out.push(PageControl::Page(total));
        }
        out
    }
}

/// Text form of the control strip: `- [1] 2 3 ... 10 >`, where `-` marks a
/// disabled Previous/Next and the current page is bracketed.
impl fmt::Display for Pager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.has_prev() { "<" } else { "-" })?;
        for ctl in self.controls() {
            match ctl {
                PageControl::Page(n) if n == self.current => write!(f, " [{n}]")?,
                PageControl::Page(n) => write!(f, " {n}")?,
                PageControl::Ellipsis => f.write_str(" ...")?,
            }
        }
        f.write_str(if self.has_next() { " >" } else { " -" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageControl::{Ellipsis, Page};

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Pager::new(0).total_pages(), 0);
        assert_eq!(Pager::new(1).total_pages(), 1);
        assert_eq!(Pager::new(10).total_pages(), 1);
        assert_eq!(Pager::new(11).total_pages(), 2);
        assert_eq!(Pager::new(500).total_pages(), 50);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut p = Pager::new(25);
        assert!(!p.go_to(0));
        assert!(!p.go_to(4));
        assert_eq!(p.current(), 1);
        assert!(p.go_to(3));
        assert_eq!(p.current(), 3);
    }

    #[test]
    fn last_page_window_is_clipped() {
        let mut p = Pager::new(25);
        p.go_to(3);
        assert_eq!(p.window(), 20..25);
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(p.visible(&items), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn controls_near_start_and_end() {
        let mut p = Pager::new(100);
        assert_eq!(p.controls(), vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]);
        p.go_to(8);
        assert_eq!(p.controls(), vec![Page(8), Page(9), Page(10)]);
        p.go_to(10);
        assert_eq!(p.controls(), vec![Page(10)]);
    }

    #[test]
    fn prev_next_edges() {
        let mut p = Pager::new(15);
        assert!(!p.has_prev());
        assert!(!p.prev());
        assert!(p.next());
        assert!(!p.has_next());
        assert!(!p.next());
        assert_eq!(p.current(), 2);
    }

    #[test]
    fn display_marks_current_and_disabled() {
        let mut p = Pager::new(100);
        assert_eq!(p.to_string(), "- [1] 2 3 ... 10 >");
        p.go_to(10);
        assert_eq!(p.to_string(), "< [10] -");
    }

    #[test]
    fn shrinking_len_clamps_current() {
        let mut p = Pager::new(100);
        p.go_to(9);
        p.set_len(30);
        assert_eq!(p.current(), 3);
    }
}
