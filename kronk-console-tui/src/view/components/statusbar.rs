//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(c.warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点和页面生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;

    let mut hints = vec![(keys.tab, actions.switch_panel)];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push((keys.arrows_ud, actions.navigate));
            hints.push((keys.enter, actions.open));
        }
        FocusPanel::Content => match app.current_page() {
            Page::ModelList | Page::CatalogList => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.refresh, actions.refresh));
            }
            Page::ModelRemove => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.remove, actions.remove));
                hints.push((keys.refresh, actions.refresh));
            }
            _ => {
                hints.push((keys.esc, actions.back));
            }
        },
    }

    hints.push((keys.help, actions.help));
    hints.push((keys.quit, actions.quit));

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{AppConfig, MemoryModelRepository};

    fn app() -> App {
        App::new(AppConfig::default(), Box::new(MemoryModelRepository::new(Vec::new())))
    }

    #[test]
    fn remove_hint_only_on_remove_page() {
        let mut app = app();
        app.focus = FocusPanel::Content;
        let remove = t().hints.keys.remove;

        app.set_current_page(Page::ModelList);
        assert!(!get_hints(&app).iter().any(|(k, _)| *k == remove));

        app.set_current_page(Page::ModelRemove);
        assert!(get_hints(&app).iter().any(|(k, _)| *k == remove));
    }

    #[test]
    fn catalog_list_offers_refresh() {
        let mut app = app();
        app.focus = FocusPanel::Content;
        app.set_current_page(Page::CatalogList);

        let hints = get_hints(&app);
        assert!(hints.iter().any(|(k, _)| *k == t().hints.keys.refresh));
        assert!(!hints.iter().any(|(k, _)| *k == t().hints.keys.remove));
    }

    #[test]
    fn quit_hint_is_always_last() {
        let app = app();
        assert_eq!(get_hints(&app).last().map(|(k, _)| *k), Some(t().hints.keys.quit));
    }
}
