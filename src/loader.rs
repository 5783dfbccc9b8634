use crate::config::LoadConfig;
use crate::data::{QuestionStore, parse_questions};
use crate::error::LoadError;
use std::sync::mpsc::{Receiver, channel};

pub type LoadResult = Result<QuestionStore, LoadError>;

/// Starts the one-time load in the background and hands back the channel
/// that will carry its result. `ctx` is asked to repaint once it arrives.
pub fn spawn_load(config: LoadConfig, ctx: egui::Context) -> Receiver<LoadResult> {
    let (tx, rx) = channel::<LoadResult>();
    log::info!("loading questions from {}", config.source);

    #[cfg(not(target_arch = "wasm32"))]
    std::thread::spawn(move || {
        let result = load_blocking(&config);
        let _ = tx.send(result);
        ctx.request_repaint();
    });

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_questions(&config.source).await;
        let _ = tx.send(result);
        ctx.request_repaint();
    });

    rx
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_blocking(config: &LoadConfig) -> LoadResult {
    let text = if config.is_remote() {
        fetch_text_blocking(&config.source, config.timeout)?
    } else {
        std::fs::read_to_string(&config.source).map_err(|source| LoadError::Io {
            path: config.source.clone(),
            source,
        })?
    };
    parse_questions(&text)
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_text_blocking(url: &str, timeout: std::time::Duration) -> Result<String, LoadError> {
    let network = |err: reqwest::Error| {
        if err.is_timeout() {
            LoadError::Timeout { url: url.to_owned() }
        } else {
            LoadError::Network {
                url: url.to_owned(),
                message: err.to_string(),
            }
        }
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(network)?;
    let response = client.get(url).send().map_err(network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::HttpStatus {
            url: url.to_owned(),
            status: status.as_u16(),
        });
    }
    response.text().map_err(network)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(url: &str) -> LoadResult {
    let text = fetch_text(url).await?;
    parse_questions(&text)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let network = |message: String| LoadError::Network {
        url: url.to_owned(),
        message,
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let window = web_sys::window().ok_or_else(|| network("no window in this context".into()))?;
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| network(format!("could not build request: {err:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| network(format!("fetch failed: {err:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| network("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(LoadError::HttpStatus {
            url: url.to_owned(),
            status: response.status(),
        });
    }

    let promise = response
        .text()
        .map_err(|err| network(format!("could not read body: {err:?}")))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|err| network(format!("could not read body: {err:?}")))?;
    text.as_string()
        .ok_or_else(|| network("response body is not text".into()))
}
