//! Back-stack bookkeeping for engines that do not expose their own history.

/// Tracks the committed page URLs of a surface, newest last.
///
/// Fed from page-load start events. After `go_back` the engine reports a
/// start event for the page it returned to; that event is recognized and
/// not pushed as a new entry. A start event for the previous entry that the
/// shell did not ask for is the engine stepping back on its own (page
/// script, in-view mouse Back) and pops the stack.
#[derive(Debug, Default, Clone)]
pub struct NavigationHistory {
    entries: Vec<String>,
    pending_back: bool,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a navigation to `url`.
    pub fn record_start(&mut self, url: &str) {
        if std::mem::take(&mut self.pending_back) && self.current() == Some(url) {
            return;
        }
        // Reloads and in-page redirects to the same URL do not add entries.
        if self.current() == Some(url) {
            return;
        }
        if self.previous() == Some(url) {
            self.entries.pop();
            return;
        }
        self.entries.push(url.to_string());
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Pop the current entry. Returns `false` when there is nothing to go back to.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.entries.pop();
        self.pending_back = true;
        true
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    fn previous(&self) -> Option<&str> {
        self.entries
            .len()
            .checked_sub(2)
            .map(|i| self.entries[i].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_no_back() {
        let mut h = NavigationHistory::new();
        h.record_start("https://mvai-connexx.com/");
        assert!(!h.can_go_back());
        assert!(!h.go_back());
        assert_eq!(h.current(), Some("https://mvai-connexx.com/"));
    }

    #[test]
    fn second_page_enables_back() {
        let mut h = NavigationHistory::new();
        h.record_start("https://mvai-connexx.com/");
        h.record_start("https://mvai-connexx.com/leads");
        assert!(h.can_go_back());
        assert!(h.go_back());
        assert_eq!(h.current(), Some("https://mvai-connexx.com/"));
        assert!(!h.can_go_back());
    }

    #[test]
    fn returning_page_load_is_not_pushed_again() {
        let mut h = NavigationHistory::new();
        h.record_start("https://a.test/1");
        h.record_start("https://a.test/2");
        h.record_start("https://a.test/3");
        h.go_back();
        h.record_start("https://a.test/2");
        assert_eq!(h.current(), Some("https://a.test/2"));
        assert!(h.go_back());
        assert_eq!(h.current(), Some("https://a.test/1"));
        assert!(!h.can_go_back());
    }

    #[test]
    fn reload_does_not_add_entry() {
        let mut h = NavigationHistory::new();
        h.record_start("https://a.test/1");
        h.record_start("https://a.test/1");
        assert!(!h.can_go_back());
    }

    #[test]
    fn engine_initiated_back_pops_the_stack() {
        let mut h = NavigationHistory::new();
        h.record_start("https://mvai-connexx.com/");
        h.record_start("https://mvai-connexx.com/leads");
        // Page script or in-view mouse Back returned to the first page.
        h.record_start("https://mvai-connexx.com/");
        assert_eq!(h.current(), Some("https://mvai-connexx.com/"));
        assert!(!h.can_go_back());
    }

    #[test]
    fn engine_back_mid_stack_keeps_earlier_entries() {
        let mut h = NavigationHistory::new();
        h.record_start("https://a.test/1");
        h.record_start("https://a.test/2");
        h.record_start("https://a.test/3");
        h.record_start("https://a.test/2");
        assert_eq!(h.current(), Some("https://a.test/2"));
        assert!(h.go_back());
        assert!(!h.can_go_back());
    }

    #[test]
    fn unexpected_page_after_back_is_recorded() {
        let mut h = NavigationHistory::new();
        h.record_start("https://a.test/1");
        h.record_start("https://a.test/2");
        h.go_back();
        h.record_start("https://a.test/login");
        assert_eq!(h.current(), Some("https://a.test/login"));
        assert!(h.go_back());
        assert!(!h.can_go_back());
    }
}
