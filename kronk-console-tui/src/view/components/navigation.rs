//! 左侧导航面板组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, NavSection};
use crate::view::theme::{colors, Styles};

/// 渲染导航面板
///
/// 导航项按分组显示，分组标题不可选中。
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let is_focused = app.focus.is_navigation();
    let current_page = app.current_page();

    let block = Block::default()
        .title(format!(" {} ", t().nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    let mut items: Vec<ListItem> = Vec::new();
    let mut cursor_row = 0;
    let mut last_section: Option<NavSection> = None;

    for (i, nav_item) in app.navigation.items.iter().enumerate() {
        let section = nav_item.page.section();
        if last_section != Some(section) {
            if let Some(heading) = section.heading() {
                items.push(ListItem::new(Line::from(Span::styled(
                    heading,
                    Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
                ))));
            }
            last_section = Some(section);
        }

        let is_cursor = i == app.navigation.selected;
        let is_active = nav_item.page == current_page;
        if is_cursor {
            cursor_row = items.len();
        }

        let prefix = if is_cursor { "▶ " } else { "  " };
        let content = format!("{}{} {}", prefix, nav_item.icon, nav_item.page.nav_label());

        let style = if is_cursor && is_focused {
            Styles::selected()
        } else if is_active {
            Style::default().fg(c.active).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };

        items.push(ListItem::new(Line::from(Span::styled(content, style))));
    }

    let list = List::new(items).block(block);

    // 使用 ListState 让光标行始终可见
    let mut state = ListState::default();
    state.select(Some(cursor_row));

    frame.render_stateful_widget(list, area, &mut state);
}
