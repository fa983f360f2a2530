//! Page Cursor
//!
//! Index into an ordered set of pages or images, clamped to `[0, len-1]`
//! with no wraparound.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageCursor {
    index: usize,
    len: usize,
}

impl PageCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// More than one page, so navigation controls are worth showing
    pub fn is_paged(&self) -> bool {
        self.len > 1
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.index -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.index += 1;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.len.saturating_sub(1));
    }

    /// Back to the first page, e.g. when a viewer reopens
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    /// "3 / 10" style indicator
    pub fn indicator(&self) -> String {
        if self.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.index + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_clamps() {
        let mut cursor = PageCursor::new(3);
        cursor.prev();
        assert_eq!(cursor.index(), 0);
        cursor.next();
        cursor.next();
        cursor.next();
        assert_eq!(cursor.index(), 2);
        assert!(!cursor.has_next());
        assert_eq!(cursor.indicator(), "3 / 3");
    }

    #[test]
    fn test_go_to_and_reset() {
        let mut cursor = PageCursor::new(4);
        cursor.go_to(10);
        assert_eq!(cursor.index(), 3);
        cursor.reset(2);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.len(), 2);
    }

    #[test]
    fn test_empty_cursor() {
        let mut cursor = PageCursor::new(0);
        cursor.next();
        cursor.go_to(5);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.indicator(), "0 / 0");
    }

    #[test]
    fn test_is_paged() {
        assert!(!PageCursor::new(0).is_paged());
        assert!(!PageCursor::new(1).is_paged());
        assert!(PageCursor::new(2).is_paged());
    }
}
