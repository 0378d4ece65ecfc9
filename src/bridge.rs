//! JavaScript surface used by the page hook.
//!
//! ARCHITECTURE
//! ============
//! The page hook owns the socket. It constructs one [`GameCanvas`] per
//! `game-loaded` push, forwards `round-started` and `game-event` bodies as
//! JSON, and forwards pointer events in CSS pixels relative to the canvas.
//! Intents come back out through the `push_event(name, payload)` callback.
//!
//! The spritesheet loads in the background; the frame loop starts once it
//! resolves. Errors from server pushes are logged and rethrown to the hook.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

use crate::assets::{TextureAtlas, resolve_image_url};
use crate::camera::Point;
use crate::config::TableConfig;
use crate::error::TableError;
use crate::protocol::{EventMessage, SnapshotMessage};
use crate::table::{Action, Table, TableState};

/// Install the console logger and panic hook once per page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // a second init only happens on hot reload, where a logger already exists
    console_log::init_with_level(log::Level::Debug).unwrap_or_default();
}

#[wasm_bindgen]
pub struct GameCanvas {
    table: Rc<RefCell<Table>>,
    push_event: js_sys::Function,
}

#[wasm_bindgen]
impl GameCanvas {
    /// Bind to `canvas` with the `game-loaded` body and start loading assets.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either JSON body is malformed or the canvas has no
    /// 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        game_json: &str,
        config_json: &str,
        push_event: js_sys::Function,
    ) -> Result<GameCanvas, JsValue> {
        let config = TableConfig::from_json(config_json).map_err(fatal)?;
        let snapshot = SnapshotMessage::parse(game_json).map_err(fatal)?.game;
        let url = config.spritesheet_url.clone();
        let table = Rc::new(RefCell::new(Table::new(canvas, config, snapshot)?));

        let table_for_load = Rc::clone(&table);
        wasm_bindgen_futures::spawn_local(async move {
            match load_assets(&url).await {
                Ok((atlas, sheet)) => {
                    let loaded = table_for_load.borrow_mut().on_assets_loaded(atlas, sheet);
                    match loaded {
                        Ok(()) => {
                            if let Err(err) = start_frame_loop(table_for_load) {
                                log::error!("frame loop did not start: {err:?}");
                            }
                        }
                        Err(err) => log::error!("table construction failed: {err}"),
                    }
                }
                Err(err) => log::error!("spritesheet {url} failed to load: {err:?}"),
            }
        });

        Ok(Self { table, push_event })
    }

    /// Whether the spritesheet has resolved and the table is drawn.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.table.borrow().core.state() == TableState::Ready
    }

    /// Apply a `round-started` body.
    ///
    /// # Errors
    ///
    /// Rethrows any [`TableError`] as a JS error.
    pub fn on_round_start(&self, json: &str) -> Result<(), JsValue> {
        let message = SnapshotMessage::parse(json).map_err(fatal)?;
        self.table.borrow_mut().on_round_start(now_ms(), message.game).map_err(fatal)
    }

    /// Apply a `game-event` body.
    ///
    /// # Errors
    ///
    /// Rethrows any [`TableError`] as a JS error.
    pub fn on_game_event(&self, json: &str) -> Result<(), JsValue> {
        let (snapshot, event) = EventMessage::parse(json).map_err(fatal)?;
        self.table.borrow_mut().on_game_event(now_ms(), snapshot, event).map_err(fatal)
    }

    /// # Errors
    ///
    /// Returns `Err` if pushing the intent to the host fails.
    pub fn pointer_down(&self, x: f64, y: f64) -> Result<(), JsValue> {
        let actions = self.table.borrow_mut().on_pointer_down(Point::new(x, y));
        self.dispatch(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if the cursor style cannot be set.
    pub fn pointer_move(&self, x: f64, y: f64) -> Result<(), JsValue> {
        let actions = self.table.borrow_mut().on_pointer_move(Point::new(x, y));
        self.dispatch(actions)
    }
}

impl GameCanvas {
    fn dispatch(&self, actions: Vec<Action>) -> Result<(), JsValue> {
        for action in actions {
            match action {
                Action::Send(intent) => {
                    let body = serde_json::to_string(&intent).map_err(|e| JsValue::from_str(&e.to_string()))?;
                    let payload = js_sys::JSON::parse(&body)?;
                    self.push_event
                        .call2(&JsValue::NULL, &JsValue::from_str(intent.event_name()), &payload)?;
                }
                Action::SetCursor(cursor) => {
                    self.table.borrow().canvas().style().set_property("cursor", &cursor)?;
                }
            }
        }
        Ok(())
    }
}

/// Log a fatal table error and convert it for the host.
fn fatal(err: TableError) -> JsValue {
    log::error!("{err}");
    JsValue::from_str(&err.to_string())
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now())
}

/// Fetch the spritesheet manifest, then decode its image.
async fn load_assets(manifest_url: &str) -> Result<(TextureAtlas, HtmlImageElement), JsValue> {
    let resp = gloo_net::http::Request::get(manifest_url)
        .send()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    if !(200..300).contains(&resp.status()) {
        return Err(JsValue::from_str(&format!("spritesheet request failed: {}", resp.status())));
    }
    let body = resp.text().await.map_err(|e| JsValue::from_str(&e.to_string()))?;
    let atlas = TextureAtlas::from_json(&body).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let sheet = load_image(&resolve_image_url(manifest_url, atlas.image())).await?;
    log::debug!("loaded {} card textures", atlas.len());
    Ok((atlas, sheet))
}

async fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    let (tx, rx) = oneshot::channel::<Result<(), JsValue>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let tx_load = Rc::clone(&tx);
    let onload = Closure::once(move || {
        if let Some(tx) = tx_load.borrow_mut().take() {
            if tx.send(Ok(())).is_err() {
                log::debug!("image listener gone before load");
            }
        }
    });
    let src_for_err = src.to_owned();
    let onerror = Closure::once(move || {
        if let Some(tx) = tx.borrow_mut().take() {
            if tx.send(Err(JsValue::from_str(&format!("image {src_for_err} failed to load")))).is_err() {
                log::debug!("image listener gone before error");
            }
        }
    });

    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    image.set_src(src);

    let result = rx.await.map_err(|_| JsValue::from_str("image load cancelled"))?;
    image.set_onload(None);
    image.set_onerror(None);
    result?;
    Ok(image)
}

/// Drive `Table::frame` from `requestAnimationFrame` for the life of the page.
fn start_frame_loop(table: Rc<RefCell<Table>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();

    let cb = Closure::wrap(Box::new(move |ts: f64| {
        if let Err(err) = table.borrow_mut().frame(ts) {
            log::error!("render failed: {err:?}");
        }
        if let Some(cb) = holder_for_cb.borrow().as_ref() {
            if let Err(err) = window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {err:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>);

    window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    *holder.borrow_mut() = Some(cb);
    Ok(())
}
