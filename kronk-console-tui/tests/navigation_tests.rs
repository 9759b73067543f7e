#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for page navigation, dispatch and the shared model list.

use std::fs;
use std::path::Path;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use kronk_console_tui::backend::{
    AppConfig, LocalCatalogRepository, LocalModelRepository, MemoryModelRepository,
};
use kronk_console_tui::event::handle_event;
use kronk_console_tui::message::{AppMessage, NavigationMessage};
use kronk_console_tui::model::{App, FocusPanel, Page};
use kronk_console_tui::update::update;
use kronk_console_tui::view::{self, dispatch, PageView};
use ratatui::{backend::TestBackend, Terminal};

fn memory_app() -> App {
    App::new(
        AppConfig::default(),
        Box::new(MemoryModelRepository::new(Vec::new())),
    )
}

fn screen(app: &App) -> String {
    screen_sized(app, 120, 30)
}

fn screen_sized(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| view::render(app, f)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

fn navigate_to_id(app: &mut App, id: &str) {
    update(
        app,
        AppMessage::Navigation(NavigationMessage::NavigateToId(id.to_string())),
    );
}

fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let msg = handle_event(Event::Key(KeyEvent::new(code, modifiers)), app);
    update(app, msg);
}

#[test]
fn navigation_scenario_reaches_every_kind_of_page() {
    let mut app = memory_app();
    let context = app.model_list().clone();

    assert_eq!(app.current_page(), Page::Home);
    assert_eq!(dispatch(app.current_page()), PageView::Welcome);
    assert!(screen(&app).contains("Welcome to Kronk"));

    navigate_to_id(&mut app, "model-list");
    assert_eq!(app.current_page(), Page::ModelList);
    assert_eq!(dispatch(app.current_page()), PageView::ModelList);

    navigate_to_id(&mut app, "security-token-create");
    assert_eq!(dispatch(app.current_page()), PageView::SecurityTokenCreate);
    assert!(screen(&app).contains("kronk security token create"));

    navigate_to_id(&mut app, "bogus");
    assert_eq!(app.current_page(), Page::Home);
    assert_eq!(dispatch(app.current_page()), PageView::Welcome);
    assert!(screen(&app).contains("Welcome to Kronk"));

    assert!(app.model_list().ptr_eq(&context));
}

#[test]
fn every_page_renders_without_panicking() {
    let mut app = memory_app();
    for page in Page::ALL {
        update(
            &mut app,
            AppMessage::Navigation(NavigationMessage::Navigate(page)),
        );
        let text = screen(&app);
        assert!(text.contains(page.title()), "missing title for {page}");
    }
}

#[test]
fn sidebar_keys_open_pages() {
    let mut app = memory_app();

    press(&mut app, KeyCode::Down, KeyModifiers::NONE);
    assert_eq!(app.current_page(), Page::Home);

    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(app.current_page(), Page::ModelList);

    press(&mut app, KeyCode::End, KeyModifiers::NONE);
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(app.current_page(), Page::SecurityTokenCreate);

    press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
    assert_eq!(app.focus, FocusPanel::Content);
    press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
    assert_eq!(app.focus, FocusPanel::Navigation);

    press(&mut app, KeyCode::Char('q'), KeyModifiers::ALT);
    assert!(app.should_quit);
}

fn write_model(root: &Path, org: &str, family: &str, file: &str) {
    let dir = root.join(org).join(family);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), b"gguf").unwrap();
}

#[test]
fn remove_flow_deletes_file_and_updates_both_pages() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    write_model(root, "Qwen", "Qwen3-8B-GGUF", "Qwen3-8B-Q8_0.gguf");
    write_model(root, "Qwen", "Qwen3-8B-GGUF", "mmproj-Qwen3-8B-Q8_0.gguf");
    write_model(root, "unsloth", "gpt-oss-20b-GGUF", "gpt-oss-20b-Q8_0.gguf");

    let mut config = AppConfig::default();
    config.models_dir = root.to_path_buf();
    let mut app = App::new(config, Box::new(LocalModelRepository::new(root)));

    navigate_to_id(&mut app, "model-list");
    assert_eq!(app.model_list().len(), 2);
    let text = screen(&app);
    assert!(text.contains("Qwen3-8B-Q8_0"));
    assert!(!text.contains("mmproj"));

    navigate_to_id(&mut app, "model-remove");
    app.focus = FocusPanel::Content;

    press(&mut app, KeyCode::Down, KeyModifiers::NONE);
    press(&mut app, KeyCode::Char('d'), KeyModifiers::ALT);
    assert!(app.modal.is_open());
    press(&mut app, KeyCode::Right, KeyModifiers::NONE);
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

    assert!(!app.modal.is_open());
    assert!(!root
        .join("unsloth/gpt-oss-20b-GGUF/gpt-oss-20b-Q8_0.gguf")
        .exists());
    assert_eq!(app.model_list().len(), 1);

    navigate_to_id(&mut app, "model-list");
    let text = screen(&app);
    assert!(text.contains("Qwen3-8B-Q8_0"));
    assert!(!text.contains("gpt-oss-20b-Q8_0"));

    // 删除带投影文件的模型，投影文件一起删除
    navigate_to_id(&mut app, "model-remove");
    app.focus = FocusPanel::Content;
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    press(&mut app, KeyCode::Right, KeyModifiers::NONE);
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

    assert_eq!(app.model_list().len(), 0);
    let family = root.join("Qwen/Qwen3-8B-GGUF");
    assert!(!family.join("Qwen3-8B-Q8_0.gguf").exists());
    assert!(!family.join("mmproj-Qwen3-8B-Q8_0.gguf").exists());
}

const TEXT_GENERATION: &str = "
name: Text-Generation
models:
  - id: Qwen3-8B-Q8_0
    capabilities:
      endpoint: chat_completion
      streaming: true
      tooling: true
  - id: gpt-oss-20b-Q8_0
    capabilities:
      endpoint: chat_completion
      reasoning: true
";

const EMBEDDING: &str = "
name: Embedding
models:
  - id: embeddinggemma-300m-qat-Q8_0
    capabilities:
      endpoint: embeddings
";

#[test]
fn catalog_list_reads_yaml_and_marks_pulled_models() {
    let tmp = tempfile::tempdir().unwrap();
    let base = tmp.path().join("kronk");
    let models_dir = base.join("models");
    write_model(&models_dir, "Qwen", "Qwen3-8B-GGUF", "qwen3-8b-q8_0.gguf");

    let mut config = AppConfig::default();
    config.base_dir.clone_from(&base);
    config.models_dir.clone_from(&models_dir);
    let catalogs_dir = config.catalogs_dir();
    fs::create_dir_all(&catalogs_dir).unwrap();
    fs::write(catalogs_dir.join("text_generation.yaml"), TEXT_GENERATION).unwrap();

    let mut app = App::new(config, Box::new(LocalModelRepository::new(&models_dir)))
        .with_catalogs(Box::new(LocalCatalogRepository::new(&catalogs_dir)));

    navigate_to_id(&mut app, "catalog-list");
    assert_eq!(dispatch(app.current_page()), PageView::CatalogList);
    assert!(app.model_list().is_loaded());

    let ids: Vec<(String, bool)> = {
        let pulled = app
            .model_list()
            .read(|data| kronk_console_tui::model::domain::pulled_ids(&data.models));
        app.catalog_table
            .entries
            .iter()
            .map(|e| (e.model.id.clone(), e.is_pulled(&pulled)))
            .collect()
    };
    assert_eq!(
        ids,
        vec![
            ("gpt-oss-20b-Q8_0".to_string(), false),
            ("Qwen3-8B-Q8_0".to_string(), true),
        ]
    );
    // 目录表格列较多，用宽一些的终端
    let text = screen_sized(&app, 160, 30);
    assert!(text.contains("Qwen3-8B-Q8_0"));
    assert!(text.contains("Text-Generation"));

    // 新下载的清单在刷新后出现，按清单名排在前面
    fs::write(catalogs_dir.join("embedding.yaml"), EMBEDDING).unwrap();
    app.focus = FocusPanel::Content;
    press(&mut app, KeyCode::Char('r'), KeyModifiers::ALT);
    assert_eq!(app.catalog_table.len(), 3);
    assert_eq!(app.catalog_table.entries[0].catalog, "Embedding");

    press(&mut app, KeyCode::End, KeyModifiers::NONE);
    assert_eq!(app.catalog_table.selected, 2);
}

#[test]
fn missing_catalogs_directory_is_retried_on_revisit() {
    let tmp = tempfile::tempdir().unwrap();
    let catalogs_dir = tmp.path().join("catalogs");
    let mut app =
        memory_app().with_catalogs(Box::new(LocalCatalogRepository::new(&catalogs_dir)));

    navigate_to_id(&mut app, "catalog-list");
    assert!(app.catalog_table.error.is_some());
    assert!(screen(&app).contains("Unable to read catalogs"));

    fs::create_dir_all(&catalogs_dir).unwrap();
    fs::write(catalogs_dir.join("embedding.yaml"), EMBEDDING).unwrap();

    navigate_to_id(&mut app, "home");
    navigate_to_id(&mut app, "catalog-list");
    assert!(app.catalog_table.error.is_none());
    assert_eq!(app.catalog_table.len(), 1);
}

#[test]
fn missing_models_directory_shows_error() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nope");
    let mut app = App::new(
        AppConfig::default(),
        Box::new(LocalModelRepository::new(&missing)),
    );

    navigate_to_id(&mut app, "model-list");
    assert!(app.model_list().is_loaded());
    assert!(app.model_list().read(|data| data.error.is_some()));
    assert!(screen(&app).contains("Unable to read models"));
}
