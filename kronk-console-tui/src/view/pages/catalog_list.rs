//! 目录列表页面视图
//!
//! 每行一个清单模型，“已拉取”一列来自共享模型列表。

use std::collections::HashSet;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::model_list::truncate;
use crate::i18n::t;
use crate::model::domain::{pulled_ids, CatalogEntry};
use crate::model::{App, CatalogTableState};
use crate::view::theme::{colors, Styles};

const CATALOG_WIDTH: u16 = 18;
const ENDPOINT_WIDTH: u16 = 16;
const COLUMN_SPACING: u16 = 1;
const HIGHLIGHT_SYMBOL: &str = "▶ ";
const HIGHLIGHT_WIDTH: u16 = 2;

/// 渲染目录列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.catalog_table;
    if !state.loaded {
        render_message(frame, area, t().common.loading, Styles::muted());
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    render_summary(app, frame, layout[0]);

    if state.is_empty() {
        if state.error.is_none() {
            render_message(frame, layout[1], t().catalog_table.no_catalogs, Styles::muted());
        }
        return;
    }

    let pulled = app.model_list().read(|data| pulled_ids(&data.models));
    render_table(state, &pulled, app.focus.is_content(), frame, layout[1]);
}

/// 顶部摘要：错误信息或清单目录
fn render_summary(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let line = if let Some(ref error) = app.catalog_table.error {
        Line::styled(
            format!(" {}: {error}", t().catalog_table.load_failed),
            Style::default().fg(c.error),
        )
    } else {
        Line::styled(
            format!(" {}", app.catalogs().location().display()),
            Styles::muted(),
        )
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, style: Style) {
    let lines = vec![Line::from(""), Line::styled(format!("  {message}"), style)];
    frame.render_widget(Paragraph::new(lines), area);
}

/// 表头宽度，至少容纳 yes/no
fn label_width(label: &str) -> u16 {
    let texts = &t().catalog_table;
    let width = label.width().max(texts.yes.width()).max(texts.no.width());
    u16::try_from(width).unwrap_or(u16::MAX)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        t().catalog_table.yes
    } else {
        t().catalog_table.no
    }
}

fn render_table(
    state: &CatalogTableState,
    pulled: &HashSet<String>,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let texts = &t().catalog_table;
    let c = colors();

    let flags = [
        texts.pulled,
        texts.images,
        texts.audio,
        texts.video,
        texts.streaming,
        texts.reasoning,
        texts.tooling,
    ];
    let flag_widths: Vec<u16> = flags.iter().map(|label| label_width(label)).collect();

    let columns = u16::try_from(flags.len() + 3).unwrap_or(u16::MAX);
    let fixed = CATALOG_WIDTH
        + ENDPOINT_WIDTH
        + flag_widths.iter().sum::<u16>()
        + COLUMN_SPACING * (columns - 1)
        + HIGHLIGHT_WIDTH;
    let id_width = area.width.saturating_sub(fixed).max(8);

    let mut header = vec![
        Cell::from(texts.catalog),
        Cell::from(texts.model_id),
        Cell::from(texts.pulled),
        Cell::from(texts.endpoint),
    ];
    header.extend(flags[1..].iter().map(|label| Cell::from(*label)));
    let header = Row::new(header).style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = state
        .entries
        .iter()
        .map(|entry| entry_row(entry, pulled, id_width))
        .collect();

    let mut widths = vec![
        Constraint::Length(CATALOG_WIDTH),
        Constraint::Length(id_width),
        Constraint::Length(flag_widths[0]),
        Constraint::Length(ENDPOINT_WIDTH),
    ];
    widths.extend(flag_widths[1..].iter().map(|w| Constraint::Length(*w)));

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

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn entry_row(entry: &CatalogEntry, pulled: &HashSet<String>, id_width: u16) -> Row<'static> {
    let c = colors();
    let caps = &entry.model.capabilities;
    let on_disk = entry.is_pulled(pulled);

    let pulled_style = if on_disk {
        Style::default().fg(c.success)
    } else {
        Styles::muted()
    };

    Row::new(vec![
        Cell::from(truncate(&entry.catalog, CATALOG_WIDTH)),
        Cell::from(truncate(&entry.model.id, id_width)),
        Cell::from(yes_no(on_disk)).style(pulled_style),
        Cell::from(truncate(&caps.endpoint, ENDPOINT_WIDTH)),
        Cell::from(yes_no(caps.images)),
        Cell::from(yes_no(caps.audio)),
        Cell::from(yes_no(caps.video)),
        Cell::from(yes_no(caps.streaming)),
        Cell::from(yes_no(caps.reasoning)),
        Cell::from(yes_no(caps.tooling)),
    ])
    .style(Style::default().fg(c.fg))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::{AppConfig, MemoryCatalogRepository, MemoryModelRepository};
    use crate::model::domain::{Capabilities, Catalog, CatalogModel, ModelFile};
    use crate::model::{FocusPanel, Page};
    use chrono::Local;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn local_model(id: &str) -> ModelFile {
        ModelFile {
            id: id.to_string(),
            organization: "Qwen".to_string(),
            family: "Qwen3-8B-GGUF".to_string(),
            size: 1,
            modified: Local::now(),
            path: PathBuf::from(format!("{id}.gguf")),
        }
    }

    fn catalog_model(id: &str, endpoint: &str, images: bool) -> CatalogModel {
        CatalogModel {
            id: id.to_string(),
            capabilities: Capabilities {
                endpoint: endpoint.to_string(),
                images,
                streaming: true,
                ..Capabilities::default()
            },
        }
    }

    fn app(local: Vec<ModelFile>, catalogs: Vec<Catalog>) -> App {
        App::new(AppConfig::default(), Box::new(MemoryModelRepository::new(local)))
            .with_catalogs(Box::new(MemoryCatalogRepository::new(catalogs)))
    }

    fn lines(app: &App, width: u16) -> Vec<String> {
        let backend = TestBackend::new(width, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(app, f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn shows_loading_before_first_visit() {
        let app = app(Vec::new(), Vec::new());
        assert!(lines(&app, 140).join("\n").contains(t().common.loading));
    }

    #[test]
    fn rows_mark_pulled_models_and_capabilities() {
        let catalogs = vec![
            Catalog {
                name: "Text-Generation".to_string(),
                models: vec![catalog_model("Qwen3-8B-Q8_0", "chat_completion", false)],
            },
            Catalog {
                name: "Image-Text-To-Text".to_string(),
                models: vec![catalog_model("Qwen2.5-VL-3B-Instruct-Q8_0", "chat_completion", true)],
            },
        ];
        let mut app = app(vec![local_model("qwen3-8b-q8_0")], catalogs);
        crate::update::navigate(&mut app, Page::CatalogList);
        app.focus = FocusPanel::Content;

        let screen = lines(&app, 140);
        let header = &screen[1];
        assert!(header.contains(t().catalog_table.catalog));
        assert!(header.contains(t().catalog_table.tooling));

        // 按清单名排序：Image-Text-To-Text 在前
        let vision = &screen[2];
        assert!(vision.contains("Qwen2.5-VL-3B-Instruct-Q8_0"));
        let text = &screen[3];
        assert!(text.contains("Qwen3-8B-Q8_0"));

        let words = |line: &str| -> Vec<String> {
            line.split_whitespace().map(str::to_string).collect()
        };
        let yes = t().catalog_table.yes.to_string();
        let no = t().catalog_table.no.to_string();

        // 列：目录 ID 已拉取 接口 图像 音频 视频 流式 推理 工具
        let vision = words(vision);
        let tail = &vision[vision.len() - 8..];
        assert_eq!(tail[0], no);
        assert_eq!(tail[1], "chat_completion");
        assert_eq!(tail[2], yes);

        let text = words(text);
        let tail = &text[text.len() - 8..];
        assert_eq!(tail[0], yes);
        assert_eq!(tail[2], no);
        assert_eq!(tail[5], yes);
    }

    #[test]
    fn shows_empty_state() {
        let mut app = app(Vec::new(), Vec::new());
        crate::update::navigate(&mut app, Page::CatalogList);
        assert!(lines(&app, 140).join("\n").contains(t().catalog_table.no_catalogs));
    }

    #[test]
    fn shows_load_error() {
        let mut app = app(Vec::new(), Vec::new());
        app.catalog_table.set_error("Catalogs directory not found: /nowhere");
        let screen = lines(&app, 140).join("\n");
        assert!(screen.contains(t().catalog_table.load_failed));
        assert!(screen.contains("/nowhere"));
    }
}
