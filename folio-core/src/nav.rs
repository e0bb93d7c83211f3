//! # Nav 模块
//!
//! 导航栏状态：滚动后的紧凑样式、移动端菜单、锚点跳转。

use crate::i18n::Translations;
use crate::motion::{StyleSnapshot, Transform, Transition};

/// 页面区块，锚点即区块元素的 id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    /// 导航栏中的顺序
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self, t: &'static Translations) -> &'static str {
        match self {
            Section::Hero => t.nav.home,
            Section::About => t.nav.about,
            Section::Skills => t.nav.skills,
            Section::Projects => t.nav.projects,
            Section::Experience => t.nav.experience,
            Section::Contact => t.nav.contact,
        }
    }
}

/// 滚动距离是否超过阈值
pub fn is_scrolled(scroll_y: f32, offset_px: f32) -> bool {
    scroll_y > offset_px
}

/// 导航栏状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// 跳转到区块：关闭菜单，返回要滚动到的元素 id
    pub fn navigate(&mut self, section: Section) -> &'static str {
        self.close_menu();
        section.anchor()
    }
}

/// 导航栏入场：从上方滑入
pub fn entrance_style(entered: bool) -> String {
    let snapshot = if entered {
        StyleSnapshot::shown()
    } else {
        StyleSnapshot::shown().with_transform(Transform::translate_y(-100.0))
    };
    format!(
        "transform: {}; transition: {};",
        snapshot.transform.to_css(),
        Transition::new(800, 0).to_css()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{EN, ES};

    #[test]
    fn test_is_scrolled() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }

    #[test]
    fn test_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);
        assert_eq!(nav.navigate(Section::Projects), "projects");
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = Section::ALL.iter().map(|s| s.label(&ES)).collect();
        assert_eq!(labels[0], "Inicio");
        assert_eq!(Section::About.label(&EN), "About");
    }

    #[test]
    fn test_entrance_style() {
        assert_eq!(
            entrance_style(false),
            "transform: translateY(-100px); transition: all 800ms cubic-bezier(0.16, 1, 0.3, 1) 0ms;"
        );
        assert!(entrance_style(true).starts_with("transform: none;"));
    }
}
