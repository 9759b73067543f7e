//! 欢迎页视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染欢迎页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let model_count = if app.model_list().is_loaded() {
        app.model_list().len().to_string()
    } else {
        texts.common.not_loaded.to_string()
    };

    let label = |name: &str| Span::styled(format!("  {name:<18}"), Styles::muted());
    let value = |text: String| Span::styled(text, Style::default().fg(c.fg));

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ◆ ", Style::default().fg(c.active)),
            Span::styled(
                texts.welcome.title,
                Style::default()
                    .fg(c.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::styled(format!("  {}", texts.welcome.description), Styles::muted()),
        Line::from(""),
        Line::from(vec![label(texts.welcome.models), value(model_count)]),
        Line::from(vec![label(texts.welcome.server), value(app.config.host.clone())]),
        Line::from(vec![
            label(texts.welcome.models_dir),
            value(app.config.models_dir.display().to_string()),
        ]),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
