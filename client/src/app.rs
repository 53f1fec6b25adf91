use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

use crate::actions::{ActionDispatcher, Collaborators};
use crate::config::ClientConfig;
use crate::dom::{get_element, DomPresentation, InputColorPicker, InputComposeBox, JsRenderer};
use crate::geometry::Viewport;
use crate::state::{SessionState, SessionStore};
use crate::ws::{connect_ws, LinkState, WsEvent};

const COLOR_PICKER_ID: &str = "color-picker";
const MESSAGE_INPUT_ID: &str = "message-input";

fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}

fn js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Browser entry point: one instance per joined lobby.
#[wasm_bindgen]
pub struct GameClient {
    dispatcher: Rc<ActionDispatcher>,
}

impl GameClient {
    fn build(config: ClientConfig, canvas: JsValue) -> Result<GameClient, JsValue> {
        let lobby_id = config
            .lobby_id
            .clone()
            .ok_or_else(|| JsValue::from_str("client config has no lobbyId"))?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let color_input: HtmlInputElement = get_element(&document, COLOR_PICKER_ID)?;
        let message_input: HtmlInputElement = get_element(&document, MESSAGE_INPUT_ID)?;

        let inbound: Rc<RefCell<Weak<ActionDispatcher>>> = Rc::new(RefCell::new(Weak::new()));
        let transport = {
            let inbound = inbound.clone();
            connect_ws(&window, &lobby_id, move |event| match event {
                WsEvent::Message(message) => {
                    if let Some(dispatcher) = inbound.borrow().upgrade() {
                        dispatcher.apply_server_message(message);
                    }
                }
                WsEvent::Link(LinkState::Connected) => log::info!("WS open"),
                WsEvent::Link(state) => log::warn!("WS {state:?}"),
            })?
        };

        let store = SessionStore::new(SessionState::from_config(&config));
        let viewport = Rc::new(Viewport::new(config.canonical_width));
        let dispatcher = Rc::new(ActionDispatcher::new(
            store,
            viewport,
            Collaborators {
                renderer: Box::new(JsRenderer::new(canvas)),
                transport: Box::new(transport),
                presentation: Box::new(DomPresentation::new(document)),
                color_picker: Box::new(InputColorPicker::new(color_input)),
                compose_box: Box::new(InputComposeBox::new(message_input)),
            },
        ));
        *inbound.borrow_mut() = Rc::downgrade(&dispatcher);

        log::info!(
            "joined lobby {lobby_id} ({}x{} board)",
            config.canonical_width,
            config.canonical_height
        );
        Ok(GameClient { dispatcher })
    }
}

#[wasm_bindgen]
impl GameClient {
    /// `config_json` is a [`ClientConfig`] document; `canvas` is the JS canvas
    /// object that owns pixel rendering.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, canvas: JsValue) -> Result<GameClient, JsValue> {
        init_logging();
        let config = ClientConfig::from_json(config_json).map_err(js_error)?;
        Self::build(config, canvas)
    }

    /// Join straight from the lobby document (`lobbyId` plus the drawing
    /// board base size) served when entering a lobby.
    #[wasm_bindgen(js_name = fromLobby)]
    pub fn from_lobby(lobby_json: &str, canvas: JsValue) -> Result<GameClient, JsValue> {
        init_logging();
        let config = ClientConfig::from_lobby_json(lobby_json).map_err(js_error)?;
        Self::build(config, canvas)
    }

    /// Must be called whenever the local canvas changes width.
    pub fn resize(&self, local_width: f64) -> Result<(), JsValue> {
        self.dispatcher
            .viewport()
            .resize(local_width)
            .map(|_| ())
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = allowDrawing)]
    pub fn allow_drawing(&self) -> bool {
        self.dispatcher.store().state().allow_drawing
    }

    pub fn clear(&self) {
        self.dispatcher.clear();
    }

    /// Call on pointer-down, before the first `draw` of a stroke.
    #[wasm_bindgen(js_name = beginStroke)]
    pub fn begin_stroke(&self) -> u32 {
        self.dispatcher.begin_stroke()
    }

    pub fn draw(&self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.dispatcher.draw(x1, y1, x2, y2);
    }

    pub fn fill(&self, x: f64, y: f64) {
        self.dispatcher.fill(x, y);
    }

    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&self, value: Option<String>) {
        self.dispatcher.set_color(value.as_deref());
    }

    #[wasm_bindgen(js_name = setLineWidth)]
    pub fn set_line_width(&self, width: f64) {
        self.dispatcher.set_line_width(width);
    }

    #[wasm_bindgen(js_name = chooseTool)]
    pub fn choose_tool(&self, value: &str) {
        self.dispatcher.choose_tool(value);
    }

    #[wasm_bindgen(js_name = chooseWord)]
    pub fn choose_word(&self, index: u32) {
        self.dispatcher.choose_word(index as usize);
    }

    pub fn kick(&self, player_id: &str) {
        self.dispatcher.kick(player_id);
    }

    #[wasm_bindgen(js_name = sendMessage)]
    pub fn send_message(&self) {
        self.dispatcher.send_chat();
    }
}
