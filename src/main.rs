#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use week_quiz::QuizApp;
use week_quiz::loader::spawn_load;

const APP_NAME: &str = "Week Quiz";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    let config = week_quiz::config::from_args();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 720.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(QuizApp::loading(spawn_load(config, cc.egui_ctx.clone()))))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();
    log::info!("starting {APP_NAME}");
    let config = week_quiz::config::from_page();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no document to attach to");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("canvas #the_canvas_id not found");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(QuizApp::loading(spawn_load(config, cc.egui_ctx.clone()))))),
            )
            .await;

        if let Err(err) = start_result {
            log::error!("failed to start eframe: {err:?}");
            if let Some(loading) = document.get_element_by_id("loading_text") {
                loading.set_inner_html("<p>The app has crashed. See the developer console for details.</p>");
            }
        }
    });
}
