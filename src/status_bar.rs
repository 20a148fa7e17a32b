//! Status bar: three text sections (left, center, right).
//!
//! Setters skip redundant writes. The clock ticks once a second but only the
//! transitions matter, so a section is pushed to the surface only when its
//! text actually changed.

use crate::config::StatusBarConfig;
use crate::surface::{NodeId, NodeKind, Surface};

#[derive(Debug)]
struct Section {
    node: NodeId,
    text: String,
}

#[derive(Debug)]
pub struct StatusBar {
    left: Section,
    center: Section,
    right: Section,
}

impl StatusBar {
    pub fn new<S: Surface>(config: &StatusBarConfig, surface: &mut S) -> Self {
        let mut section = |text: &str| {
            let node = surface.create_node(NodeKind::StatusSection);
            surface.set_label(node, text);
            Section {
                node,
                text: text.to_string(),
            }
        };
        Self {
            left: section(&config.left),
            center: section(""),
            right: section(&config.right),
        }
    }

    pub fn left(&self) -> &str {
        &self.left.text
    }

    pub fn center(&self) -> &str {
        &self.center.text
    }

    pub fn right(&self) -> &str {
        &self.right.text
    }

    /// Returns true when the section text changed and was written out.
    pub fn set_left<S: Surface>(&mut self, text: &str, surface: &mut S) -> bool {
        Self::set_section(&mut self.left, text, surface)
    }

    pub fn set_center<S: Surface>(&mut self, text: &str, surface: &mut S) -> bool {
        Self::set_section(&mut self.center, text, surface)
    }

    pub fn set_right<S: Surface>(&mut self, text: &str, surface: &mut S) -> bool {
        Self::set_section(&mut self.right, text, surface)
    }

    fn set_section<S: Surface>(section: &mut Section, text: &str, surface: &mut S) -> bool {
        if section.text == text {
            return false;
        }
        section.text = text.to_string();
        surface.set_label(section.node, text);
        true
    }

    pub fn detach<S: Surface>(&mut self, surface: &mut S) {
        surface.remove_node(self.left.node);
        surface.remove_node(self.center.node);
        surface.remove_node(self.right.node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::surface::HeadlessSurface;

    #[test]
    fn sections_start_from_the_config() {
        let mut surface = HeadlessSurface::new(Rect::new(0, 0, 100, 100));
        let config = StatusBarConfig {
            enabled: true,
            left: "host".to_string(),
            right: "ok".to_string(),
        };
        let bar = StatusBar::new(&config, &mut surface);
        assert_eq!(bar.left(), "host");
        assert_eq!(bar.center(), "");
        assert_eq!(bar.right(), "ok");
        assert_eq!(surface.node_count(), 3);
    }

    #[test]
    fn redundant_writes_are_skipped() {
        let mut surface = HeadlessSurface::new(Rect::new(0, 0, 100, 100));
        let bar_config = StatusBarConfig::default();
        let mut bar = StatusBar::new(&bar_config, &mut surface);

        assert!(bar.set_center("12:00:01", &mut surface));
        assert!(!bar.set_center("12:00:01", &mut surface));
        assert!(bar.set_center("12:00:02", &mut surface));
        assert_eq!(bar.center(), "12:00:02");
    }

    #[test]
    fn detach_removes_all_sections() {
        let mut surface = HeadlessSurface::new(Rect::new(0, 0, 100, 100));
        let bar_config = StatusBarConfig::default();
        let mut bar = StatusBar::new(&bar_config, &mut surface);
        bar.detach(&mut surface);
        assert_eq!(surface.node_count(), 0);
    }
}
