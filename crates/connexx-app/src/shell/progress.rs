/// Visibility and percentage of the page-load indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressIndicator {
    visible: bool,
    percent: u8,
}

impl ProgressIndicator {
    /// Show the indicator at 0% for a new navigation.
    pub fn start(&mut self) {
        self.visible = true;
        self.percent = 0;
    }

    /// Raise the percentage to `percent` (clamped to 100). Lower values
    /// reported later in the same navigation are ignored.
    pub fn update(&mut self, percent: u8) {
        self.percent = self.percent.max(percent.min(100));
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let p = ProgressIndicator::default();
        assert!(!p.is_visible());
        assert_eq!(p.percent(), 0);
    }

    #[test]
    fn start_resets_percent() {
        let mut p = ProgressIndicator::default();
        p.start();
        p.update(80);
        p.hide();
        p.start();
        assert!(p.is_visible());
        assert_eq!(p.percent(), 0);
    }

    #[test]
    fn percent_never_decreases() {
        let mut p = ProgressIndicator::default();
        p.start();
        let mut shown = Vec::new();
        for v in [10, 40, 30, 70, 5, 100, 90] {
            p.update(v);
            shown.push(p.percent());
        }
        assert!(shown.windows(2).all(|w| w[0] <= w[1]), "{shown:?}");
        assert_eq!(p.percent(), 100);
    }

    #[test]
    fn percent_is_clamped() {
        let mut p = ProgressIndicator::default();
        p.start();
        p.update(250);
        assert_eq!(p.percent(), 100);
    }
}
