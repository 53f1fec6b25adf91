//! Client-side synchronization core of the Scribble drawing game.
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Local ↔ canonical coordinate mapping and the viewport |
//! | [`tools`] | Tools and the color each one paints with |
//! | [`color`] | Color notation normalization |
//! | [`state`] | Session state store with merge updates |
//! | [`actions`] | One dispatcher entry point per player intent |
//! | [`remote`] | Applying lobby broadcasts locally |
//! | [`config`] | Client configuration |
//! | [`net`] / [`ws`] | Transport trait and the browser websocket transport |
//! | [`render`] / [`panels`] / [`dom`] | Renderer and presentation seams, DOM adapters |

pub mod actions;
mod app;
pub mod color;
pub mod config;
pub mod dom;
pub mod geometry;
pub mod net;
pub mod panels;
pub mod remote;
pub mod render;
pub mod state;
#[cfg(test)]
mod testing;
pub mod tools;
pub mod ws;

pub use actions::{ActionDispatcher, Collaborators};
pub use app::GameClient;
