//! Kronk Console TUI
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 文件日志，失败不影响运行
//!     load_config()           // 默认值 → 配置文件 → 环境变量 → 命令行参数
//!     model::App::new()       // 创建 APP 实例
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use simplelog::LevelFilter;

use kronk_console_tui::app;
use kronk_console_tui::backend::{
    AppConfig, ConfigService, JsonConfigService, LocalCatalogRepository, LocalModelRepository,
};
use kronk_console_tui::i18n::{set_language, Language};
use kronk_console_tui::model::App;
use kronk_console_tui::util::{default_log_path, init_logging, init_terminal, restore_terminal};
use kronk_console_tui::view::theme::set_theme;

#[derive(Parser)]
#[command(name = "kronk-console", version, about = "Terminal console for a Kronk model server")]
struct Args {
    /// 配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,

    /// 本地模型目录（覆盖 KRONK_MODELS）
    #[arg(long)]
    models_dir: Option<PathBuf>,

    /// Kronk 数据根目录（目录清单位于其下的 catalogs）
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Kronk 服务器地址（覆盖 KRONK_WEB_API_HOST）
    #[arg(long)]
    host: Option<String>,

    /// 日志文件路径
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args.log_file.clone().unwrap_or_else(default_log_path);
    init_logging(&log_path, LevelFilter::Debug);
    info!("kronk console v{} starting", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args)?;

    set_theme(config.theme);
    match Language::from_code(&config.language) {
        Some(lang) => set_language(lang),
        None => warn!("unsupported language {:?}, using en-US", config.language),
    }

    let models = LocalModelRepository::new(config.models_dir.clone());
    let catalogs = LocalCatalogRepository::new(config.catalogs_dir());
    let mut app = App::new(config, Box::new(models)).with_catalogs(Box::new(catalogs));

    // 初始化终端
    let mut terminal = init_terminal()?;

    // 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}

/// 加载配置并依次应用环境变量和命令行参数
fn load_config(args: &Args) -> Result<AppConfig> {
    let service = args
        .config
        .as_ref()
        .map_or_else(JsonConfigService::default, |path| JsonConfigService::new(path.clone()));

    let mut config = service
        .load()
        .with_context(|| format!("failed to load {}", service.path().display()))?;

    // 首次启动时写入默认配置
    if !service.exists() {
        if let Err(e) = service.save(&config) {
            warn!("failed to write default config: {e}");
        }
    }

    config.apply_env();

    if let Some(ref dir) = args.models_dir {
        config.models_dir.clone_from(dir);
    }
    if let Some(ref dir) = args.base_dir {
        config.base_dir.clone_from(dir);
    }
    if let Some(ref host) = args.host {
        config.host.clone_from(host);
    }

    info!(
        "config: host={} models_dir={} base_dir={}",
        config.host,
        config.models_dir.display(),
        config.base_dir.display()
    );
    Ok(config)
}
