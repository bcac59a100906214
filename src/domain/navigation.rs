// Sidebar navigation: exactly one entry and its section are active at a time

#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub target: &'static str,
}

#[derive(Debug, Clone)]
pub struct Navigation {
    entries: Vec<NavEntry>,
    active: usize,
}

impl Navigation {
    fn new(entries: Vec<NavEntry>, active: usize) -> Self {
        debug_assert!(active < entries.len());
        Self { entries, active }
    }

    pub fn sidebar() -> Self {
        Self::new(
            vec![
                NavEntry {
                    id: "dashboard",
                    label: "Dashboard",
                    target: "dashboard",
                },
                NavEntry {
                    id: "prediction",
                    label: "Future Prediction",
                    target: "future-prediction",
                },
            ],
            0,
        )
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn active_entry(&self) -> &NavEntry {
        &self.entries[self.active]
    }

    pub fn active_section(&self) -> &'static str {
        self.active_entry().target
    }

    pub fn is_active(&self, entry_id: &str) -> bool {
        self.active_entry().id == entry_id
    }

    /// Activates the entry and its target section; unknown ids change nothing
    pub fn select(&mut self, entry_id: &str) -> bool {
        match self.entries.iter().position(|e| e.id == entry_id) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_active_at_load() {
        let nav = Navigation::sidebar();
        assert_eq!(nav.active_section(), "dashboard");
    }

    #[test]
    fn test_select_switches_single_section() {
        let mut nav = Navigation::sidebar();
        assert!(nav.select("prediction"));
        assert_eq!(nav.active_section(), "future-prediction");
        assert!(!nav.is_active("dashboard"));

        assert!(!nav.select("settings"));
        assert_eq!(nav.active_section(), "future-prediction");
    }

    #[test]
    fn test_every_entry_can_be_activated() {
        let mut nav = Navigation::sidebar();
        let ids: Vec<&str> = nav.entries().iter().map(|e| e.id).collect();
        assert!(!ids.is_empty());

        for id in ids {
            assert!(nav.select(id));
            assert_eq!(nav.active_entry().id, id);
            assert_eq!(nav.entries().iter().filter(|e| nav.is_active(e.id)).count(), 1);
        }
    }
}
