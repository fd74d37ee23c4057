//! 页面导航逻辑
//!
//! 区块跳转与滚动控制

use strum::IntoEnumIterator;

use crate::content::SectionId;
use crate::interfaces::tui::app::state::App;
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;

impl App {
    /// 跳转到指定区块
    ///
    /// Smooth-scrolls unless reduced motion is on, in which case it lands
    /// there in one jump.
    pub fn jump_to_section(&mut self, id: SectionId) {
        let Some(extent) = self.sections.iter().find(|s| s.id == id) else {
            return;
        };
        let target = extent.top as f32;
        if self.effects.reduced_motion {
            self.scroll.snap_to(target);
        } else {
            self.scroll.animate_to(target);
        }
    }

    /// 跳转到下一个区块(循环)
    pub fn next_section(&mut self) {
        let current = self.active_section.map(|s| s.index()).unwrap_or(0);
        let all: Vec<SectionId> = SectionId::iter().collect();
        let next = all[(current + 1) % all.len()];
        self.jump_to_section(next);
    }

    /// 跳转到上一个区块(循环)
    pub fn prev_section(&mut self) {
        let current = self.active_section.map(|s| s.index()).unwrap_or(0);
        let all: Vec<SectionId> = SectionId::iter().collect();
        let prev = all[(current + all.len() - 1) % all.len()];
        self.jump_to_section(prev);
    }

    /// 向上翻页
    pub fn page_up(&mut self) {
        self.scroll.scroll_by(-PAGE_SCROLL_STEP);
    }

    /// 向下翻页
    pub fn page_down(&mut self) {
        self.scroll.scroll_by(PAGE_SCROLL_STEP);
    }

    /// 回到顶部
    pub fn jump_top(&mut self) {
        self.scroll.snap_to(0.0);
    }

    /// 跳到底部
    pub fn jump_bottom(&mut self) {
        self.scroll.snap_to(self.scroll.max_offset());
    }
}

#[cfg(test)]
mod tests {
    use crate::content::SectionId;
    use crate::effects::SectionExtent;
    use crate::interfaces::tui::app::state::App;
    use crate::mailer::RelayConfig;
    use crate::system::app_config::EffectsConfig;

    fn app_with_sections() -> App {
        let profile = crate::content::load_default_profile().unwrap();
        let mut app = App::new(profile, RelayConfig::default(), EffectsConfig::default());
        app.sections = vec![
            SectionExtent {
                id: SectionId::Home,
                top: 0,
                height: 30,
            },
            SectionExtent {
                id: SectionId::About,
                top: 30,
                height: 25,
            },
        ];
        app.scroll.set_bounds(120, 40);
        app
    }

    #[test]
    fn test_jump_to_section_animates_toward_top_row() {
        let mut app = app_with_sections();
        app.jump_to_section(SectionId::About);
        assert!(app.scroll.is_animating());
        // Drive the animation to its destination.
        for _ in 0..600 {
            app.scroll.on_tick();
        }
        assert_eq!(app.scroll.row_offset(), 30);
    }

    #[test]
    fn test_reduced_motion_jumps_without_animation() {
        let mut app = app_with_sections();
        app.effects.reduced_motion = true;
        app.jump_to_section(SectionId::About);
        assert!(!app.scroll.is_animating());
        assert_eq!(app.scroll.row_offset(), 30);
    }

    #[test]
    fn test_jump_to_unknown_section_is_a_no_op() {
        let mut app = app_with_sections();
        app.jump_to_section(SectionId::Contact);
        assert!(!app.scroll.is_animating());
        assert_eq!(app.scroll.row_offset(), 0);
    }

    #[test]
    fn test_page_scroll_and_edges() {
        let mut app = app_with_sections();
        app.page_down();
        assert_eq!(app.scroll.offset(), 10.0);
        app.jump_bottom();
        assert_eq!(app.scroll.offset(), app.scroll.max_offset());
        app.jump_top();
        assert_eq!(app.scroll.offset(), 0.0);
        app.page_up();
        assert_eq!(app.scroll.offset(), 0.0);
    }
}
