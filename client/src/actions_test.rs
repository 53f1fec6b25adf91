use scribble_shared::{ClientMessage, Fill, Line};

use super::*;
use crate::state::SessionState;
use crate::testing::{Harness, RenderCall};

fn set(harness: &Harness, patch: StatePatch) {
    harness.store.set_state(patch);
}

// =============================================================
// draw
// =============================================================

#[test]
fn pen_stroke_is_rendered_locally_and_sent_canonical() {
    let harness = Harness::with_scale_up(2.0);
    set(
        &harness,
        StatePatch {
            local_tool: Some(Tool::Pen),
            local_color: Some("#ff0000".into()),
            local_line_width: Some(4.0),
            ..StatePatch::default()
        },
    );

    harness.dispatcher.draw(10.0, 10.0, 20.0, 20.0);

    assert_eq!(
        harness.render_calls(),
        vec![RenderCall::Line {
            x1: 10.0,
            y1: 10.0,
            x2: 20.0,
            y2: 20.0,
            color: "#ff0000".into(),
            width: 4.0,
        }]
    );
    assert_eq!(
        harness.sent(),
        vec![ClientMessage::Line(Line {
            from_x: 20.0,
            from_y: 20.0,
            to_x: 40.0,
            to_y: 40.0,
            color: "#ff0000".into(),
            line_width: 8.0,
            gesture_id: 0,
        })]
    );
}

#[test]
fn rubber_stroke_paints_white_everywhere() {
    let harness = Harness::with_scale_up(1.0);
    set(
        &harness,
        StatePatch {
            local_tool: Some(Tool::Rubber),
            local_color: Some("#ff0000".into()),
            ..StatePatch::default()
        },
    );

    harness.dispatcher.draw(1.0, 2.0, 3.0, 4.0);

    let calls = harness.render_calls();
    let [RenderCall::Line { color, .. }] = calls.as_slice() else {
        panic!("expected one rendered line");
    };
    assert_eq!(color, "#ffffff");
    let sent = harness.sent();
    let [ClientMessage::Line(line)] = sent.as_slice() else {
        panic!("expected one sent line");
    };
    assert_eq!(line.color, "#ffffff");
}

#[test]
fn tool_is_resolved_per_segment() {
    let harness = Harness::with_scale_up(1.0);
    set(
        &harness,
        StatePatch {
            local_color: Some("#0000ff".into()),
            ..StatePatch::default()
        },
    );

    harness.dispatcher.draw(0.0, 0.0, 1.0, 1.0);
    harness.dispatcher.choose_tool("rubber");
    harness.dispatcher.draw(1.0, 1.0, 2.0, 2.0);

    let colors: Vec<String> = harness
        .sent()
        .into_iter()
        .filter_map(|message| match message {
            ClientMessage::Line(line) => Some(line.color),
            _ => None,
        })
        .collect();
    assert_eq!(colors, vec!["#0000ff".to_string(), "#ffffff".to_string()]);
}

#[test]
fn segments_carry_the_current_gesture_id() {
    let harness = Harness::with_scale_up(1.0);

    assert_eq!(harness.dispatcher.begin_stroke(), 1);
    harness.dispatcher.draw(0.0, 0.0, 1.0, 1.0);
    harness.dispatcher.draw(1.0, 1.0, 2.0, 2.0);
    assert_eq!(harness.dispatcher.begin_stroke(), 2);
    harness.dispatcher.draw(5.0, 5.0, 6.0, 6.0);

    let ids: Vec<u32> = harness
        .sent()
        .into_iter()
        .filter_map(|message| match message {
            ClientMessage::Line(line) => Some(line.gesture_id),
            _ => None,
        })
        .collect();
    assert_eq!(ids, vec![1, 1, 2]);
}

#[test]
fn stroke_with_non_finite_point_is_dropped() {
    let harness = Harness::with_scale_up(2.0);
    harness.dispatcher.draw(f64::NAN, 0.0, 1.0, 1.0);
    assert!(harness.render_calls().is_empty());
    assert!(harness.sent().is_empty());
}

#[test]
fn draw_uses_factors_current_at_call_time() {
    let harness = Harness::with_scale_up(1.0);
    harness.viewport.resize(400.0).unwrap();
    harness.dispatcher.draw(1.0, 1.0, 2.0, 2.0);

    let sent = harness.sent();
    let [ClientMessage::Line(line)] = sent.as_slice() else {
        panic!("expected one sent line");
    };
    assert_eq!((line.from_x, line.to_x), (4.0, 8.0));
}

// =============================================================
// fill / clear
// =============================================================

#[test]
fn fill_scales_seed_and_keeps_selected_color() {
    let harness = Harness::with_scale_up(3.0);
    set(
        &harness,
        StatePatch {
            local_color: Some("#00ff00".into()),
            ..StatePatch::default()
        },
    );

    harness.dispatcher.fill(5.0, 5.0);

    assert_eq!(
        harness.render_calls(),
        vec![RenderCall::Fill {
            x: 5.0,
            y: 5.0,
            color: "#00ff00".into(),
        }]
    );
    assert_eq!(
        harness.sent(),
        vec![ClientMessage::Fill(Fill {
            x: 15.0,
            y: 15.0,
            color: "#00ff00".into(),
        })]
    );
}

#[test]
fn fill_ignores_rubber_tool() {
    let harness = Harness::with_scale_up(1.0);
    set(
        &harness,
        StatePatch {
            local_tool: Some(Tool::Rubber),
            local_color: Some("#abcdef".into()),
            ..StatePatch::default()
        },
    );
    harness.dispatcher.fill(1.0, 1.0);
    let sent = harness.sent();
    let [ClientMessage::Fill(fill)] = sent.as_slice() else {
        panic!("expected one fill");
    };
    assert_eq!(fill.color, "#abcdef");
}

#[test]
fn clear_wipes_canvas_and_notifies_lobby() {
    let harness = Harness::with_scale_up(1.0);
    let before = harness.store.state();
    harness.dispatcher.clear();
    assert_eq!(harness.render_calls(), vec![RenderCall::Clear]);
    assert_eq!(harness.sent(), vec![ClientMessage::Clear]);
    assert_eq!(harness.store.state(), before);
}

// =============================================================
// set_color / set_line_width / choose_tool
// =============================================================

#[test]
fn explicit_color_is_normalized_into_state_and_picker() {
    let harness = Harness::with_scale_up(1.0);
    harness.dispatcher.set_color(Some("rgb(255, 0, 0)"));
    assert_eq!(harness.store.state().local_color, "#ff0000");
    assert_eq!(harness.color_picker.value.borrow().as_deref(), Some("#ff0000"));
    assert!(harness.sent().is_empty());
}

#[test]
fn missing_color_reads_picker() {
    let harness = Harness::with_scale_up(1.0);
    *harness.color_picker.value.borrow_mut() = Some("#00FF00".into());
    harness.dispatcher.set_color(None);
    assert_eq!(harness.store.state().local_color, "#00ff00");
}

#[test]
fn empty_picker_or_bad_color_leaves_state_alone() {
    let harness = Harness::with_scale_up(1.0);
    let before = harness.store.state();
    harness.dispatcher.set_color(None);
    harness.dispatcher.set_color(Some("chartreuse-ish"));
    assert_eq!(harness.store.state(), before);
    assert!(harness.color_picker.value.borrow().is_none());
}

#[test]
fn line_width_is_stored_unscaled_and_scaled() {
    let harness = Harness::with_scale_up(2.0);
    harness.dispatcher.set_line_width(10.0);
    let state = harness.store.state();
    assert_eq!(state.local_line_width_unscaled, 10.0);
    assert_eq!(state.local_line_width, 5.0);
    assert!(harness.render_calls().is_empty());
}

#[test]
fn line_width_is_not_rederived_on_resize() {
    let harness = Harness::with_scale_up(2.0);
    harness.dispatcher.set_line_width(10.0);
    harness.viewport.resize(1600.0).unwrap();
    assert_eq!(harness.store.state().local_line_width, 5.0);
}

#[test]
fn non_finite_line_width_is_ignored() {
    let harness = Harness::with_scale_up(1.0);
    let before = harness.store.state();
    harness.dispatcher.set_line_width(f64::INFINITY);
    assert_eq!(harness.store.state(), before);
}

#[test]
fn invalid_tool_is_a_silent_no_op() {
    let harness = Harness::with_scale_up(1.0);
    harness.dispatcher.choose_tool("pen");
    harness.dispatcher.choose_tool("invalid");
    assert_eq!(harness.store.state().local_tool, Tool::Pen);

    harness.dispatcher.choose_tool("fill-bucket");
    harness.dispatcher.choose_tool("");
    assert_eq!(harness.store.state().local_tool, Tool::FillBucket);
    assert!(harness.sent().is_empty());
}

// =============================================================
// choose_word / kick / chat
// =============================================================

#[test]
fn choosing_a_word_starts_the_turn() {
    let harness = Harness::with_scale_up(1.0);

    harness.dispatcher.choose_word(2);

    assert!(harness.store.state().allow_drawing);
    assert_eq!(harness.sent(), vec![ClientMessage::ChooseWord(2)]);
    assert_eq!(
        harness.panel_calls(),
        vec![
            (Panel::WordDialog, false),
            (Panel::Toolbox, true),
            (Panel::PlayerList, false),
        ]
    );
}

#[test]
fn second_word_choice_in_a_turn_is_dropped() {
    let harness = Harness::with_scale_up(1.0);
    harness.dispatcher.choose_word(0);
    harness.dispatcher.choose_word(1);
    assert_eq!(harness.sent(), vec![ClientMessage::ChooseWord(0)]);
    assert_eq!(harness.panel_calls().len(), 3);
}

#[test]
fn kick_sends_vote_every_time() {
    let harness = Harness::with_scale_up(1.0);
    harness.dispatcher.kick("player-1");
    harness.dispatcher.kick("player-1");
    assert_eq!(
        harness.sent(),
        vec![
            ClientMessage::KickVote("player-1".into()),
            ClientMessage::KickVote("player-1".into()),
        ]
    );
    assert_eq!(harness.store.state(), SessionState::default());
}

#[test]
fn chat_is_sent_verbatim_and_box_cleared() {
    let harness = Harness::with_scale_up(1.0);
    *harness.compose_box.text.borrow_mut() = "  hello there ".into();

    harness.dispatcher.send_chat();

    assert_eq!(
        harness.sent(),
        vec![ClientMessage::Message("  hello there ".into())]
    );
    assert!(harness.compose_box.text.borrow().is_empty());
    assert_eq!(*harness.compose_box.clears.borrow(), 1);
}

#[test]
fn empty_chat_is_still_sent() {
    let harness = Harness::with_scale_up(1.0);
    harness.dispatcher.send_chat();
    assert_eq!(harness.sent(), vec![ClientMessage::Message(String::new())]);
    assert_eq!(*harness.compose_box.clears.borrow(), 1);
}
