//! Mobile navigation disclosure state

/// Open/closed state of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Menu button pressed.
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// A navigation link was activated. Always ends closed.
    pub fn navigate(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Classes of the collapsible panel in this state.
    pub fn panel_class(self) -> &'static str {
        match self {
            MenuState::Closed => "mobile-menu",
            MenuState::Open => "mobile-menu mobile-menu-open",
        }
    }

    /// Accessible label for the menu button in this state.
    pub fn button_label(self) -> &'static str {
        match self {
            MenuState::Closed => "Open navigation menu",
            MenuState::Open => "Close navigation menu",
        }
    }
}

/// Header layout rules. The panel collapses to zero height while closed;
/// from 768px up the desktop navigation replaces the button and panel.
pub const MENU_CSS: &str = "\
.site-header { position: fixed; top: 0; left: 0; right: 0; z-index: 50; }
.desktop-nav { display: none; align-items: center; gap: 2rem; }
.mobile-menu { max-height: 0; overflow: hidden; transition: max-height 0.3s ease-in-out; }
.mobile-menu-open { max-height: 24rem; }
@media (min-width: 768px) {
    .desktop-nav { display: flex; }
    .menu-button, .mobile-menu { display: none; }
}
";

/// Input events the disclosure reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    Navigate,
}

impl MenuEvent {
    pub fn apply(self, state: MenuState) -> MenuState {
        match self {
            MenuEvent::Toggle => state.toggle(),
            MenuEvent::Navigate => state.navigate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(events: &[MenuEvent]) -> MenuState {
        events
            .iter()
            .fold(MenuState::default(), |state, event| event.apply(state))
    }

    #[test]
    fn test_initial_state_is_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(MenuState::Closed.toggle(), MenuState::Open);
        assert_eq!(MenuState::Open.toggle(), MenuState::Closed);
    }

    #[test]
    fn test_navigate_always_closes() {
        assert_eq!(MenuState::Open.navigate(), MenuState::Closed);
        assert_eq!(MenuState::Closed.navigate(), MenuState::Closed);
    }

    #[test]
    fn test_open_iff_odd_toggles_since_last_navigation() {
        use MenuEvent::*;

        let sequences: [&[MenuEvent]; 6] = [
            &[Toggle],
            &[Toggle, Toggle],
            &[Toggle, Navigate],
            &[Toggle, Navigate, Toggle],
            &[Toggle, Toggle, Toggle, Navigate, Toggle, Toggle],
            &[Navigate, Navigate, Toggle, Toggle, Toggle],
        ];

        for events in sequences {
            let since_close = events
                .iter()
                .rev()
                .take_while(|e| **e != Navigate)
                .count();
            assert_eq!(
                replay(events).is_open(),
                since_close % 2 == 1,
                "sequence {:?}",
                events
            );
        }
    }

    #[test]
    fn test_button_label_follows_state() {
        assert_eq!(MenuState::Closed.button_label(), "Open navigation menu");
        assert_eq!(MenuState::Open.button_label(), "Close navigation menu");
    }

    #[test]
    fn test_panel_class_follows_state() {
        assert_eq!(MenuState::Closed.panel_class(), "mobile-menu");
        assert_eq!(MenuState::Open.panel_class(), "mobile-menu mobile-menu-open");
        assert_eq!(
            MenuEvent::Navigate.apply(MenuState::Open).panel_class(),
            "mobile-menu"
        );
    }

    #[test]
    fn test_menu_css_defines_panel_classes() {
        assert!(MENU_CSS.contains(".mobile-menu { max-height: 0;"));
        assert!(MENU_CSS.contains(".mobile-menu-open { max-height: 24rem; }"));
        assert!(MENU_CSS.contains("@media (min-width: 768px)"));
        assert!(MENU_CSS.contains(".menu-button, .mobile-menu { display: none; }"));
        assert!(MENU_CSS.contains(".desktop-nav { display: flex; }"));
    }
}
