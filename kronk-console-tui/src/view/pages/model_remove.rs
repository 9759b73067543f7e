//! 删除模型页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

use super::model_list;

/// 渲染删除模型页面
///
/// 与模型列表页读取同一份共享数据，只多一行操作提示。
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let hint = Line::styled(format!(" {}", t().model_table.remove_hint), Styles::muted());
    frame.render_widget(Paragraph::new(hint), layout[0]);

    model_list::render_models(app, &app.model_remove_table, frame, layout[1]);
}
