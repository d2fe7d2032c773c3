use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::util::colors;

/// One-line Prev/Next row. A control exists only when the current page
/// carries the matching continuation link.
pub struct Pager {
    has_prev: bool,
    has_next: bool,
}

impl Pager {
    pub fn new(has_prev: bool, has_next: bool) -> Self {
        Self { has_prev, has_next }
    }
}

impl Widget for Pager {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let control = Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD);

        let mut spans: Vec<Span> = Vec::new();
        if self.has_prev {
            spans.push(Span::styled("← Prev [p]", control));
        }
        if self.has_prev && self.has_next {
            spans.push(Span::raw("   "));
        }
        if self.has_next {
            spans.push(Span::styled("[n] Next →", control));
        }
        if spans.is_empty() {
            return;
        }

        let line = Line::from(spans);
        let width = (line.width() as u16).min(area.width);
        let centered = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y,
            width,
            height: 1,
        };
        line.render(centered, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(has_prev: bool, has_next: bool) -> String {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        Pager::new(has_prev, has_next).render(area, &mut buf);

        (0..area.width)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn renders_only_the_next_control() {
        let row = rendered(false, true);

        assert!(row.contains("Next"));
        assert!(!row.contains("Prev"));
    }

    #[test]
    fn renders_only_the_prev_control() {
        let row = rendered(true, false);

        assert!(row.contains("Prev"));
        assert!(!row.contains("Next"));
    }

    #[test]
    fn renders_both_controls() {
        let row = rendered(true, true);

        assert!(row.contains("Prev"));
        assert!(row.contains("Next"));
    }

    #[test]
    fn renders_nothing_without_links() {
        assert_eq!(rendered(false, false).trim(), "");
    }
}
