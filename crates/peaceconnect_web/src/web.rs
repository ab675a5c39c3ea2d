//! Browser entry point: logging, config, surface detection, and the ordered
//! initializers of each surface.

mod carousel;
mod charts;
mod dialogs;
mod dom;
mod error;
mod goals;
mod header;
mod modal;
mod mount;
mod navigation;
mod newsletter;
mod notification;
mod reveal;
mod settings;
mod sidebar;
mod tables;
mod user_menu;

use std::rc::Rc;

use peaceconnect::backend::{Backend, InertBackend};
use peaceconnect::bootstrap::{self, BootstrapReport, Step, Surface, Wired};
use peaceconnect::config::SiteConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use self::error::WebError;

const CONFIG_SCRIPT: &str = "siteConfig";

fn read_config() -> Result<SiteConfig, WebError> {
    let raw = dom::by_id::<Element>(CONFIG_SCRIPT).and_then(|el| el.text_content());
    Ok(SiteConfig::from_json_str(raw.as_deref().unwrap_or(""))?)
}

fn detect_surface() -> Surface {
    let declared = dom::document()
        .ok()
        .and_then(|doc| doc.body())
        .and_then(|body| body.get_attribute("data-surface"));
    let has_sidebar = dom::by_id::<Element>(sidebar::SIDEBAR).is_some();
    Surface::detect(declared.as_deref(), has_sidebar)
}

/// Stand-in for the dashboard KPI refresh; the backend has nothing to return.
fn load_dashboard_data() -> Result<Wired, WebError> {
    if InertBackend.load("kpis").is_none() {
        log::info!("KPIs chargés");
    }
    Ok(Wired::Attached)
}

fn boot_back_office(cfg: &Rc<SiteConfig>) -> BootstrapReport {
    let mut steps: Vec<Step<'_, WebError>> = Vec::new();
    steps.push(("sidebar", Box::new(|| sidebar::init_sidebar(cfg))));
    steps.push(("navigation", Box::new(|| navigation::init_navigation(cfg))));
    steps.push(("charts", Box::new(charts::init_charts)));
    steps.push(("tables", Box::new(|| tables::init_tables(cfg))));
    steps.push(("modal", Box::new(modal::init_modal)));
    steps.push(("user menu", Box::new(|| user_menu::init_user_menu(cfg))));
    steps.push(("settings", Box::new(settings::init_settings)));
    steps.push(("dashboard data", Box::new(load_dashboard_data)));
    bootstrap::run(steps)
}

fn boot_front_office(cfg: &Rc<SiteConfig>) -> BootstrapReport {
    let mut steps: Vec<Step<'_, WebError>> = Vec::new();
    steps.push(("header", Box::new(|| header::init_header(cfg))));
    steps.push(("carousel", Box::new(carousel::init_carousel)));
    steps.push(("goal grid", Box::new(goals::init_goal_grid)));
    steps.push(("newsletter", Box::new(|| newsletter::init_newsletter(cfg))));
    // Last, so the rendered goal cards are observed too.
    steps.push(("scroll reveal", Box::new(|| reveal::init_scroll_reveal(cfg))));
    bootstrap::run(steps)
}

/// Config is read here, once the page (and its config script) is parsed.
fn boot() {
    let config = read_config();
    let level = config
        .as_ref()
        .map(SiteConfig::log_level)
        .unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
    let cfg = Rc::new(config.unwrap_or_else(|e| {
        log::warn!("#{CONFIG_SCRIPT}: {e}; using defaults");
        SiteConfig::default()
    }));

    let surface = detect_surface();
    let report = match surface {
        Surface::BackOffice => boot_back_office(&cfg),
        Surface::FrontOffice => boot_front_office(&cfg),
    };
    log::info!(
        "{} prêt ({} composants, {} absents, {} en échec)",
        surface.attr(),
        report.attached(),
        report.skipped(),
        report.failed()
    );
}

/// Run `f` once the document is parsed.
fn on_ready(f: impl FnOnce() + 'static) -> Result<(), WebError> {
    let doc = dom::document()?;
    if doc.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let cb = Closure::once_into_js(f);
    doc.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())
        .map_err(WebError::js("addEventListener"))
}

pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = on_ready(boot) {
        web_sys::console::error_1(&format!("peaceconnect: {e}").into());
    }
}
