//! 模型列表页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n::t;
use crate::model::{App, ModelListData, ModelTableState};
use crate::view::theme::{colors, Styles};

const ORG_WIDTH: u16 = 16;
const FAMILY_WIDTH: u16 = 24;
const SIZE_WIDTH: u16 = 10;
const MODIFIED_WIDTH: u16 = 16;
const COLUMN_SPACING: u16 = 1;
const HIGHLIGHT_SYMBOL: &str = "▶ ";
const HIGHLIGHT_WIDTH: u16 = 2;

/// 渲染模型列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    render_models(app, &app.model_list_table, frame, area);
}

/// 渲染共享模型列表（列表页和删除页共用）
pub(super) fn render_models(app: &App, table: &ModelTableState, frame: &mut Frame, area: Rect) {
    let focused = app.focus.is_content();

    app.model_list().read(|data| {
        if !data.loaded {
            render_message(frame, area, t().common.loading, Styles::muted());
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);

        render_summary(data, frame, layout[0]);

        if data.is_empty() {
            if data.error.is_none() {
                render_message(frame, layout[1], t().model_table.no_models, Styles::muted());
            }
            return;
        }

        render_table(data, table.selected, focused, frame, layout[1]);
    });
}

/// 顶部摘要：刷新时间或错误信息
fn render_summary(data: &ModelListData, frame: &mut Frame, area: Rect) {
    let texts = &t().model_table;
    let c = colors();

    let line = if let Some(ref error) = data.error {
        Line::styled(
            format!(" {}: {error}", texts.load_failed),
            Style::default().fg(c.error),
        )
    } else if let Some(at) = data.refreshed_at {
        Line::styled(
            format!(" {} {}", texts.refreshed_at, at.format("%H:%M:%S")),
            Styles::muted(),
        )
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, style: Style) {
    let lines = vec![Line::from(""), Line::styled(format!("  {message}"), style)];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_table(
    data: &ModelListData,
    selected: usize,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let texts = &t().model_table;
    let c = colors();

    let fixed = ORG_WIDTH
        + FAMILY_WIDTH
        + SIZE_WIDTH
        + MODIFIED_WIDTH
        + COLUMN_SPACING * 4
        + HIGHLIGHT_WIDTH;
    let id_width = area.width.saturating_sub(fixed).max(8);

    let header = Row::new(vec![
        Cell::from(texts.id),
        Cell::from(texts.organization),
        Cell::from(texts.family),
        Cell::from(texts.size),
        Cell::from(texts.modified),
    ])
    .style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = data
        .models
        .iter()
        .map(|model| {
            Row::new(vec![
                Cell::from(truncate(&model.id, id_width)),
                Cell::from(truncate(&model.organization, ORG_WIDTH)),
                Cell::from(truncate(&model.family, FAMILY_WIDTH)),
                Cell::from(model.display_size()),
                Cell::from(model.display_modified()),
            ])
            .style(Style::default().fg(c.fg))
        })
        .collect();

    let widths = [
        Constraint::Length(id_width),
        Constraint::Length(ORG_WIDTH),
        Constraint::Length(FAMILY_WIDTH),
        Constraint::Length(SIZE_WIDTH),
        Constraint::Length(MODIFIED_WIDTH),
    ];

    let highlight = if focused {
        Styles::selected()
    } else {
        Style::default().fg(c.active)
    };

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .row_highlight_style(highlight)
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

/// 按显示宽度截断文本，超出时以 "…" 结尾
pub(crate) fn truncate(text: &str, max_width: u16) -> String {
    let max_width = usize::from(max_width);
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        result.push(ch);
        width += w;
    }
    result.push('…');
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::{AppConfig, MemoryModelRepository};
    use crate::model::domain::ModelFile;
    use crate::model::{FocusPanel, Page};
    use chrono::{Local, TimeZone};
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn model(id: &str) -> ModelFile {
        ModelFile {
            id: id.to_string(),
            organization: "Qwen".to_string(),
            family: "Qwen3-8B-GGUF".to_string(),
            size: 4_683_072_000,
            modified: Local.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap(),
            path: PathBuf::from(format!("{id}.gguf")),
        }
    }

    fn screen(app: &App) -> String {
        let backend = TestBackend::new(100, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(app, f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn app(models: Vec<ModelFile>) -> App {
        App::new(AppConfig::default(), Box::new(MemoryModelRepository::new(models)))
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("模型文件名", 5), "模型…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn shows_loading_before_first_load() {
        let app = app(vec![model("Qwen3-8B-Q8_0")]);
        assert!(screen(&app).contains(t().common.loading));
    }

    #[test]
    fn shows_models_after_load() {
        let mut app = app(vec![model("Qwen3-8B-Q8_0")]);
        crate::update::navigate(&mut app, Page::ModelList);
        app.focus = FocusPanel::Content;

        let text = screen(&app);
        assert!(text.contains("Qwen3-8B-Q8_0"));
        assert!(text.contains("4.7 GB"));
        assert!(text.contains("2025-03-01 09:30"));
        assert!(text.contains(t().model_table.refreshed_at));
    }

    #[test]
    fn shows_empty_state() {
        let mut app = app(Vec::new());
        crate::update::navigate(&mut app, Page::ModelList);
        assert!(screen(&app).contains(t().model_table.no_models));
    }

    #[test]
    fn shows_load_error() {
        let mut app = app(Vec::new());
        app.model_list().update(|data| data.set_error("permission denied"));
        let text = screen(&app);
        assert!(text.contains(t().model_table.load_failed));
        assert!(text.contains("permission denied"));
    }
}
