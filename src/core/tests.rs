#[cfg(test)]
mod tests {
    use crate::core::{
        EmailDraft, MenuEvent, MenuState, RevealTracker, ScrollProgress, Skin, SubmitOutcome,
        header_opacity, hero_offset,
    };

    /// Everything the landing page owns for one mount.
    #[derive(Default)]
    struct PageState {
        menu: MenuState,
        email: EmailDraft,
        sections: Vec<RevealTracker>,
        entrances: Vec<u32>,
    }

    impl PageState {
        fn report(&mut self, section: usize, visible: bool) {
            if self.sections[section].report(visible) {
                self.entrances[section] += 1;
            }
        }

        fn with_sections(count: usize) -> Self {
            Self {
                sections: vec![RevealTracker::new(); count],
                entrances: vec![0; count],
                ..Self::default()
            }
        }
    }

    // ========================================================================
    // Independence of local state and scroll-derived values
    // ========================================================================

    #[test]
    fn test_menu_and_email_do_not_affect_scroll_values() {
        let progress = ScrollProgress::new(0.07);
        let opacity_before = header_opacity(progress);
        let offset_before = hero_offset(progress);

        let mut page = PageState::default();
        page.menu = MenuEvent::Toggle.apply(page.menu);
        page.email.replace("donor@example.com");
        page.menu = MenuEvent::Navigate.apply(page.menu);

        assert_eq!(header_opacity(progress), opacity_before);
        assert_eq!(hero_offset(progress), offset_before);
    }

    #[test]
    fn test_menu_and_email_are_independent() {
        let mut page = PageState::default();

        page.email.replace("a");
        page.menu = MenuEvent::Toggle.apply(page.menu);
        assert_eq!(page.email.as_str(), "a");
        assert!(page.menu.is_open());

        page.email.clear();
        assert!(page.menu.is_open());

        page.menu = MenuEvent::Navigate.apply(page.menu);
        page.email.replace("ab");
        assert_eq!(page.menu, MenuState::Closed);
        assert_eq!(page.email.as_str(), "ab");
    }

    #[test]
    fn test_submit_leaves_page_untouched() {
        let mut page = PageState::default();
        page.email.replace("abc");
        page.menu = page.menu.toggle();

        assert_eq!(page.email.submit(), SubmitOutcome::NotWired);
        assert_eq!(page.email.as_str(), "abc");
        assert!(page.menu.is_open());
    }

    // ========================================================================
    // Section reveals over a simulated scroll session
    // ========================================================================

    #[test]
    fn test_each_section_reveals_once_over_repeated_scrolling() {
        let mut page = PageState::with_sections(4);

        // Section `i` is visible when the viewport window covers it.
        let visible_at = |section: usize, viewport: usize| viewport == section;

        // Scroll down, back up, and down again.
        let path: Vec<usize> = (0..4).chain((0..4).rev()).chain(0..4).collect();
        for viewport in path {
            for i in 0..4 {
                page.report(i, visible_at(i, viewport));
            }
        }

        assert_eq!(page.entrances, vec![1; 4]);
        for tracker in &page.sections {
            assert!(tracker.state().is_revealed());
        }
    }

    #[test]
    fn test_unseen_section_stays_hidden() {
        let mut page = PageState::with_sections(2);
        for _ in 0..5 {
            page.report(0, true);
            page.report(1, false);
        }
        assert_eq!(page.entrances, vec![1, 0]);
        assert!(!page.sections[1].state().is_revealed());
    }

    // ========================================================================
    // Skins share behavior
    // ========================================================================

    #[test]
    fn test_skins_share_state_machines() {
        for skin in Skin::ALL {
            let content = skin.content();
            let mut page = PageState::with_sections(content.features.len());
            page.menu = page.menu.toggle();
            for _ in content.navigation {
                page.menu = page.menu.navigate();
                assert_eq!(page.menu, MenuState::Closed);
            }
            assert_eq!(page.sections.len(), 4);
        }
    }
}
