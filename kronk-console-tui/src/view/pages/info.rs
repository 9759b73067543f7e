//! 信息面板视图
//!
//! 运行中的模型、拉取、目录、运行库和安全相关页面由 Kronk 服务端完成，
//! 控制台只展示说明、对应的 `kronk` 命令和当前配置的服务地址。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::{t, InfoDescriptions};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 信息面板内容
pub struct InfoPanel {
    /// 等价的命令行
    pub command: &'static str,
    /// 从翻译中取说明文本
    pub description: fn(&InfoDescriptions) -> &'static str,
}

pub const MODEL_PS: InfoPanel = InfoPanel {
    command: "kronk model ps",
    description: |d| d.model_ps,
};

pub const MODEL_PULL: InfoPanel = InfoPanel {
    command: "kronk model pull <MODEL_URL> [MMPROJ_URL]",
    description: |d| d.model_pull,
};

pub const CATALOG_PULL: InfoPanel = InfoPanel {
    command: "kronk catalog pull <MODEL_ID>",
    description: |d| d.catalog_pull,
};

pub const LIBS_PULL: InfoPanel = InfoPanel {
    command: "kronk libs",
    description: |d| d.libs_pull,
};

pub const SECURITY_KEY_LIST: InfoPanel = InfoPanel {
    command: "kronk security key list",
    description: |d| d.security_key_list,
};

pub const SECURITY_KEY_CREATE: InfoPanel = InfoPanel {
    command: "kronk security key create",
    description: |d| d.security_key_create,
};

pub const SECURITY_KEY_DELETE: InfoPanel = InfoPanel {
    command: "kronk security key delete",
    description: |d| d.security_key_delete,
};

pub const SECURITY_TOKEN_CREATE: InfoPanel = InfoPanel {
    command: "kronk security token create --username <NAME> --duration <1h|1d|1m|1y> --endpoints <LIST>",
    description: |d| d.security_token_create,
};

/// 渲染信息面板
pub fn render(app: &App, frame: &mut Frame, area: Rect, panel: InfoPanel) {
    let texts = &t().info;
    let c = colors();

    let label = |name: &str| Line::styled(format!("  {name}"), Styles::muted());

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", (panel.description)(&texts.descriptions)),
            Style::default().fg(c.fg),
        ),
        Line::from(""),
        label(texts.command),
        Line::from(vec![
            Span::raw("    $ "),
            Span::styled(
                panel.command,
                Style::default()
                    .fg(c.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        label(texts.server),
        Line::styled(format!("    {}", app.config.host), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(format!("  {}", texts.note), Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::{AppConfig, MemoryModelRepository};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(panel: InfoPanel) -> String {
        let mut config = AppConfig::default();
        config.host = "10.0.0.5:8080".to_string();
        let app = App::new(config, Box::new(MemoryModelRepository::new(Vec::new())));

        let backend = TestBackend::new(120, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(&app, f, f.area(), panel))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn panel_shows_command_and_host() {
        let text = screen(CATALOG_PULL);
        assert!(text.contains("kronk catalog pull <MODEL_ID>"));
        assert!(text.contains("10.0.0.5:8080"));
        assert!(text.contains(t().info.descriptions.catalog_pull));
    }

    #[test]
    fn panels_have_distinct_commands() {
        let commands = [
            MODEL_PS.command,
            MODEL_PULL.command,
            CATALOG_PULL.command,
            LIBS_PULL.command,
            SECURITY_KEY_LIST.command,
            SECURITY_KEY_CREATE.command,
            SECURITY_KEY_DELETE.command,
            SECURITY_TOKEN_CREATE.command,
        ];
        let unique: std::collections::HashSet<_> = commands.iter().collect();
        assert_eq!(unique.len(), commands.len());
    }
}
