#[cfg(test)]
#[path = "ws_test.rs"]
mod ws_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, MessageEvent, WebSocket, Window};

use scribble_shared::{decode_server_message, encode_client_message, ClientMessage, ServerMessage};

use crate::net::{websocket_url, Transport};

const PAYLOAD_SNIPPET_CHARS: usize = 200;

/// Connection lifecycle as reported by the socket's DOM events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkState {
    Connected,
    Disconnected,
    Failed,
}

impl LinkState {
    pub const ALL: [LinkState; 3] = [
        LinkState::Connected,
        LinkState::Disconnected,
        LinkState::Failed,
    ];

    /// The websocket event that signals this state.
    pub fn event_name(self) -> &'static str {
        match self {
            LinkState::Connected => "open",
            LinkState::Disconnected => "close",
            LinkState::Failed => "error",
        }
    }
}

#[derive(Debug)]
pub enum WsEvent {
    Link(LinkState),
    Message(ServerMessage),
}

type EventSink = Rc<RefCell<dyn FnMut(WsEvent)>>;

/// Lobby transport over a browser websocket. Messages sent while the socket
/// is not open are dropped.
pub struct WsTransport {
    socket: WebSocket,
}

impl WsTransport {
    pub fn is_open(&self) -> bool {
        self.socket.ready_state() == WebSocket::OPEN
    }
}

impl Transport for WsTransport {
    fn send(&self, message: ClientMessage) {
        if !self.is_open() {
            log::debug!("socket not open, dropping outbound message");
            return;
        }
        match encode_client_message(&message) {
            Ok(payload) => {
                if let Err(error) = self.socket.send_with_str(&payload) {
                    log::warn!("WS send failed: {error:?}");
                }
            }
            Err(error) => log::error!("{error}"),
        }
    }
}

pub fn connect_ws(
    window: &Window,
    lobby_id: &str,
    on_event: impl 'static + FnMut(WsEvent),
) -> Result<WsTransport, JsValue> {
    let ws_url = websocket_url(window, lobby_id)?;
    log::info!("WS connecting url={ws_url}");
    let socket = WebSocket::new(&ws_url)?;

    let on_event: EventSink = Rc::new(RefCell::new(on_event));
    for state in LinkState::ALL {
        forward_link_state(&socket, state, &on_event)?;
    }

    {
        let on_event = on_event.clone();
        let onmessage = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            let Some(text) = event.data().as_string() else {
                log::error!("WS message data is not a string");
                return;
            };
            match decode_server_message(&text) {
                Ok(message) => on_event.borrow_mut()(WsEvent::Message(message)),
                Err(error) => log::warn!("{error} payload={:?}", payload_snippet(&text)),
            }
        });
        socket.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        onmessage.forget();
    }

    {
        let socket = socket.clone();
        let onbeforeunload = Closure::<dyn FnMut(Event)>::new(move |_| {
            if let Err(error) = socket.close() {
                log::debug!("WS close on unload failed: {error:?}");
            }
        });
        window.add_event_listener_with_callback(
            "beforeunload",
            onbeforeunload.as_ref().unchecked_ref(),
        )?;
        onbeforeunload.forget();
    }

    Ok(WsTransport { socket })
}

fn forward_link_state(
    socket: &WebSocket,
    state: LinkState,
    on_event: &EventSink,
) -> Result<(), JsValue> {
    let on_event = on_event.clone();
    let listener = Closure::<dyn FnMut(Event)>::new(move |_| {
        on_event.borrow_mut()(WsEvent::Link(state));
    });
    socket.add_event_listener_with_callback(
        state.event_name(),
        listener.as_ref().unchecked_ref(),
    )?;
    listener.forget();
    Ok(())
}

/// Truncate an undecodable payload for logging.
fn payload_snippet(text: &str) -> String {
    if text.chars().count() <= PAYLOAD_SNIPPET_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(PAYLOAD_SNIPPET_CHARS).collect();
    format!("{head}...")
}
