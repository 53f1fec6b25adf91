//! Recording collaborators for dispatcher tests.

use std::cell::RefCell;
use std::rc::Rc;

use scribble_shared::ClientMessage;

use crate::actions::{ActionDispatcher, Collaborators};
use crate::geometry::{ScaleFactors, Viewport};
use crate::net::Transport;
use crate::panels::{ColorPicker, ComposeBox, Panel, Presentation};
use crate::render::Renderer;
use crate::state::{SessionState, SessionStore};

#[derive(Clone, Debug, PartialEq)]
pub enum RenderCall {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: String,
        width: f64,
    },
    Fill {
        x: f64,
        y: f64,
        color: String,
    },
    Clear,
}

#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub calls: Rc<RefCell<Vec<RenderCall>>>,
}

impl Renderer for RecordingRenderer {
    fn draw_line(&self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.calls.borrow_mut().push(RenderCall::Line {
            x1,
            y1,
            x2,
            y2,
            color: color.to_string(),
            width,
        });
    }

    fn fill(&self, x: f64, y: f64, color: &str) {
        self.calls.borrow_mut().push(RenderCall::Fill {
            x,
            y,
            color: color.to_string(),
        });
    }

    fn clear(&self) {
        self.calls.borrow_mut().push(RenderCall::Clear);
    }
}

#[derive(Clone, Default)]
pub struct RecordingTransport {
    pub sent: Rc<RefCell<Vec<ClientMessage>>>,
}

impl Transport for RecordingTransport {
    fn send(&self, message: ClientMessage) {
        self.sent.borrow_mut().push(message);
    }
}

/// `(panel, visible)` in call order.
#[derive(Clone, Default)]
pub struct RecordingPresentation {
    pub calls: Rc<RefCell<Vec<(Panel, bool)>>>,
}

impl Presentation for RecordingPresentation {
    fn show(&self, panel: Panel) {
        self.calls.borrow_mut().push((panel, true));
    }

    fn hide(&self, panel: Panel) {
        self.calls.borrow_mut().push((panel, false));
    }
}

#[derive(Clone, Default)]
pub struct FakeColorPicker {
    pub value: Rc<RefCell<Option<String>>>,
}

impl ColorPicker for FakeColorPicker {
    fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn set_value(&self, color: &str) {
        *self.value.borrow_mut() = Some(color.to_string());
    }
}

#[derive(Clone, Default)]
pub struct FakeComposeBox {
    pub text: Rc<RefCell<String>>,
    pub clears: Rc<RefCell<usize>>,
}

impl ComposeBox for FakeComposeBox {
    fn value(&self) -> String {
        self.text.borrow().clone()
    }

    fn clear(&self) {
        self.text.borrow_mut().clear();
        *self.clears.borrow_mut() += 1;
    }
}

/// A dispatcher wired to recording collaborators.
pub struct Harness {
    pub dispatcher: ActionDispatcher,
    pub store: SessionStore,
    pub viewport: Rc<Viewport>,
    pub renderer: RecordingRenderer,
    pub transport: RecordingTransport,
    pub presentation: RecordingPresentation,
    pub color_picker: FakeColorPicker,
    pub compose_box: FakeComposeBox,
}

impl Harness {
    pub fn with_scale_up(scale_up: f64) -> Self {
        let factors = ScaleFactors::from_scale_up(scale_up).unwrap();
        let viewport = Rc::new(Viewport::with_factors(1600.0, factors));
        let store = SessionStore::new(SessionState::default());
        let renderer = RecordingRenderer::default();
        let transport = RecordingTransport::default();
        let presentation = RecordingPresentation::default();
        let color_picker = FakeColorPicker::default();
        let compose_box = FakeComposeBox::default();
        let dispatcher = ActionDispatcher::new(
            store.clone(),
            viewport.clone(),
            Collaborators {
                renderer: Box::new(renderer.clone()),
                transport: Box::new(transport.clone()),
                presentation: Box::new(presentation.clone()),
                color_picker: Box::new(color_picker.clone()),
                compose_box: Box::new(compose_box.clone()),
            },
        );
        Self {
            dispatcher,
            store,
            viewport,
            renderer,
            transport,
            presentation,
            color_picker,
            compose_box,
        }
    }

    pub fn render_calls(&self) -> Vec<RenderCall> {
        self.renderer.calls.borrow().clone()
    }

    pub fn sent(&self) -> Vec<ClientMessage> {
        self.transport.sent.borrow().clone()
    }

    pub fn panel_calls(&self) -> Vec<(Panel, bool)> {
        self.presentation.calls.borrow().clone()
    }
}
