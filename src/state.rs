//! Local UI state for the landing pages.
//!
//! Every interactive widget on the site reduces to one of three small state
//! cells: the expanded FAQ entry, the booking modal visibility, and the
//! active color theme. Each cell is a plain value with pure transition
//! methods, so behavior can be tested without a browser.

/// Expansion state of the FAQ accordion. At most one entry is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    /// All entries collapsed.
    pub const fn collapsed() -> Self {
        Self { open: None }
    }

    /// A single entry expanded.
    pub const fn expanded(index: usize) -> Self {
        Self { open: Some(index) }
    }

    /// Handle a click on the header of `index`: collapse it when it is
    /// already the open entry, otherwise expand it and implicitly collapse
    /// whatever was open before.
    pub fn toggled(self, index: usize) -> Self {
        if self.open == Some(index) {
            Self::collapsed()
        } else {
            Self::expanded(index)
        }
    }

    pub fn is_expanded(self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(self) -> Option<usize> {
        self.open
    }
}

/// Visibility of the booking confirmation modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    visible: bool,
}

impl ModalState {
    pub const fn hidden() -> Self {
        Self { visible: false }
    }

    /// Show the dialog. Opening while already visible is a no-op.
    pub fn opened(self) -> Self {
        Self { visible: true }
    }

    /// Hide the dialog, whether from the close control, the confirmation
    /// button, or a click on the backdrop.
    pub fn dismissed(self) -> Self {
        Self { visible: false }
    }

    pub fn is_visible(self) -> bool {
        self.visible
    }
}

/// Site color scheme. Only the Dusk variant exposes a toggle for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class on the page wrapper. Every themed style rule keys off it, so a
    /// single class swap restyles all sections in the same render.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    /// Label for the toggle control, showing what a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "\u{1F319}",
            Theme::Dark => "\u{2600}\u{FE0F}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accordion_starts_collapsed_by_default() {
        assert_eq!(AccordionState::default(), AccordionState::collapsed());
        assert_eq!(AccordionState::default().open_index(), None);
    }

    #[test]
    fn accordion_expands_a_collapsed_entry() {
        let state = AccordionState::collapsed().toggled(2);
        assert!(state.is_expanded(2));
        assert_eq!(state.open_index(), Some(2));
    }

    #[test]
    fn accordion_collapses_the_open_entry() {
        let state = AccordionState::expanded(2).toggled(2);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn accordion_moves_expansion_between_entries() {
        let state = AccordionState::expanded(1).toggled(3);
        assert!(state.is_expanded(3));
        assert!(!state.is_expanded(1));
    }

    #[test]
    fn accordion_keeps_at_most_one_entry_open() {
        let clicks = [0usize, 2, 2, 1, 4, 4, 0, 3, 3, 3];
        let mut state = AccordionState::expanded(0);
        for &index in &clicks {
            state = state.toggled(index);
            let open: Vec<usize> = (0..5).filter(|&j| state.is_expanded(j)).collect();
            assert!(open.len() <= 1, "multiple entries open: {open:?}");
            assert_eq!(state.open_index(), open.first().copied());
        }
    }

    #[test]
    fn modal_starts_hidden() {
        assert!(!ModalState::default().is_visible());
    }

    #[test]
    fn modal_open_is_idempotent() {
        let once = ModalState::hidden().opened();
        let twice = once.opened();
        assert_eq!(once, twice);
        assert!(twice.is_visible());
    }

    #[test]
    fn modal_close_restores_the_initial_state() {
        let state = ModalState::hidden().opened().dismissed();
        assert_eq!(state, ModalState::hidden());
    }

    #[test]
    fn theme_defaults_to_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn theme_toggle_is_an_involution() {
        let mut theme = Theme::Light;
        for step in 1..=7 {
            theme = theme.toggled();
            let expected = if step % 2 == 0 { Theme::Light } else { Theme::Dark };
            assert_eq!(theme, expected, "after {step} toggles");
        }
    }

    #[test]
    fn theme_classes_are_distinct() {
        assert_ne!(Theme::Light.class(), Theme::Dark.class());
        assert_ne!(Theme::Light.toggle_icon(), Theme::Dark.toggle_icon());
    }
}
