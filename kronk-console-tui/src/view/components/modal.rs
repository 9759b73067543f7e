//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::state::Modal;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmRemove {
            model_id, focus, ..
        } => render_confirm_remove(frame, model_id, *focus),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗外框，返回内容区域
fn render_frame(frame: &mut Frame, area: Rect, title: &str, accent: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 渲染确认删除弹窗
fn render_confirm_remove(frame: &mut Frame, model_id: &str, focus: usize) {
    let texts = t();
    let c = colors();

    let area = centered_rect(50, 9, frame.area());
    let inner = render_frame(frame, area, texts.modal.confirm_remove_title, c.error);

    let cancel_style = if focus == 0 {
        Styles::selected()
    } else {
        Style::default().fg(c.fg)
    };

    let confirm_style = if focus == 1 {
        Style::default()
            .bg(c.error)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            texts.modal.confirm_remove_message,
            Style::default().fg(c.fg),
        ),
        Line::styled(format!("\"{model_id}\""), Style::default().fg(c.warning)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.modal.remove_button), confirm_style),
        ]),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();

    let area = centered_rect(60, 9, frame.area());
    let inner = render_frame(frame, area, title, c.error);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(t().modal.close_hint, Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let c = colors();

    let area = centered_rect(50, 18, frame.area());
    let inner = render_frame(frame, area, texts.help.title, c.border_focused);

    let heading = Style::default()
        .fg(c.border_focused)
        .add_modifier(Modifier::BOLD);
    let row = |key: &str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<8}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        Line::styled(texts.help.global, heading),
        row(keys.tab, actions.switch_panel),
        row("↑↓/jk", actions.navigate),
        row(keys.enter, actions.open),
        row(keys.esc, actions.back),
        row(keys.refresh, actions.refresh),
        row(keys.help, actions.help),
        row(keys.quit, actions.quit),
        Line::from(""),
        Line::styled(texts.help.lists, heading),
        row(keys.arrows_ud, actions.select),
        row(keys.remove, actions.remove),
        Line::from(""),
        Line::styled(texts.help.close_hint, Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
