use blockfall::core::{Engine, GameSnapshot, ScriptedPieces};
use blockfall::term::palette::{self, DANGER, SUCCESS};
use blockfall::term::{
    music_tempo, AnchorY, FrameBuffer, GameView, HudInfo, Viewport, IDLE_PROMPT,
};
use blockfall::types::{PieceKind, Pixel};

fn hud() -> HudInfo {
    HudInfo {
        max_score: 0,
        tempo: 1.0,
        unsaved: false,
    }
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // field pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, &hud(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_c_cell_with_inner_mark() {
    let mut snap = GameSnapshot::default();
    snap.field[19][0] = Some(Pixel::C);

    let fb = GameView::default().render(&snap, &hud(), Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let left = fb.get(1, 20).unwrap();
    let right = fb.get(2, 20).unwrap();
    assert_eq!((left.ch, right.ch), ('[', ']'));
    assert_eq!(left.style.bg, palette::pixel_color(0, Pixel::C));
}

#[test]
fn term_view_border_tracks_running_state() {
    let mut engine = Engine::with_source(ScriptedPieces::new(vec![PieceKind::S, PieceKind::Z]));
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let idle = view.render(&engine.snapshot(), &hud(), vp);
    assert_eq!(idle.get(0, 0).unwrap().style.fg, DANGER);
    assert!(screen_text(&idle).contains(IDLE_PROMPT));

    engine.start();
    let running = view.render(&engine.snapshot(), &hud(), vp);
    assert_eq!(running.get(0, 0).unwrap().style.fg, SUCCESS);
    assert!(!screen_text(&running).contains(IDLE_PROMPT));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut engine = Engine::new(1);
    engine.start();
    let mut snap = engine.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 25;

    let info = HudInfo {
        max_score: 9000,
        tempo: music_tempo(5),
        unsaved: false,
    };
    let fb = GameView::default().render(&snap, &info, Viewport::new(60, 24));
    let all = screen_text(&fb);

    for label in ["NEXT", "SCORE", "MAX", "LINES", "LEVEL", "1234", "9000", "25", "HURRY"] {
        assert!(all.contains(label), "missing {}", label);
    }
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let fb = GameView::default().render(&GameSnapshot::default(), &hud(), Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_centers_field_by_default_on_tall_viewports() {
    let view = GameView::default();
    let fb = view.render(&GameSnapshot::default(), &hud(), Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_field_to_top() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&GameSnapshot::default(), &hud(), Viewport::new(22, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let view = GameView::default();
    let snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(10, 10);

    view.render_into(&snap, &hud(), Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
    assert_eq!(fb, view.render(&snap, &hud(), Viewport::new(40, 24)));
}
