use snake_tetris::core::{GameSnapshot, GameState};
use snake_tetris::term::{AnchorY, FrameBuffer, GameView, Viewport};
use snake_tetris::types::{DeathCause, Direction, Phase, Pos, Rgb};

// With cell_w=2 and cell_h=1 the board is 36x25, plus border => 38x27.
const FRAME: Viewport = Viewport {
    width: 38,
    height: 27,
};

fn text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n")
}

fn ch(fb: &FrameBuffer, x: u16, y: u16) -> char {
    fb.get(x, y).map(|c| c.ch).unwrap_or('?')
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1, 0, 0).snapshot(0);
    let view = GameView::default();
    assert_eq!(view.frame_size(), (38, 27));

    let fb = view.render(&snap, FRAME);

    assert_eq!(ch(&fb, 0, 0), '┌');
    assert_eq!(ch(&fb, 37, 0), '┐');
    assert_eq!(ch(&fb, 0, 26), '└');
    assert_eq!(ch(&fb, 37, 26), '┘');
}

#[test]
fn term_view_renders_settled_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.snake = vec![Pos::new(9, 12)];
    snap.settled = vec![(Pos::new(0, 24), Rgb::new(255, 0, 0))];

    let fb = GameView::default().render(&snap, FRAME);

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 24);
    assert_eq!(ch(&fb, x0, y0), '█');
    assert_eq!(ch(&fb, x0 + 1, y0), '█');
    assert_eq!(fb.get(x0, y0).map(|c| c.style.fg), Some(Rgb::new(255, 0, 0)));
    // Neighbor is an empty grid dot.
    assert_eq!(ch(&fb, x0 + 2, y0), '·');
}

#[test]
fn term_view_draws_head_eyes_facing_heading() {
    let mut snap = GameSnapshot::default();
    snap.snake = vec![Pos::new(4, 3), Pos::new(3, 3)];
    snap.direction = Direction::Right;

    let fb = GameView::default().render(&snap, FRAME);

    assert_eq!(ch(&fb, 1 + 8, 1 + 3), '▐');
    assert_eq!(ch(&fb, 1 + 6, 1 + 3), '█');
}

#[test]
fn term_view_draws_apple_and_star() {
    let mut snap = GameSnapshot::default();
    snap.apple = Some(Pos::new(2, 2));
    snap.star = Some(Pos::new(5, 7));

    let fb = GameView::default().render(&snap, FRAME);

    assert_eq!(ch(&fb, 1 + 4, 1 + 2), '●');
    assert_eq!(ch(&fb, 1 + 10, 1 + 7), '★');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1, 0, 0).snapshot(0);
    snap.score = 1234;
    snap.high_score = 5678;

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(80, 27));
    let all = text(&fb);

    for word in ["LENGTH", "SCORE", "HIGH", "APPLES", "1234", "5678"] {
        assert!(all.contains(word), "missing {word}");
    }
    assert!(!all.contains("DESTROY"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = GameState::new(1, 0, 0).snapshot(0);
    let fb = GameView::default().render(&snap, FRAME);
    assert!(!text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_destruction_countdown() {
    let mut snap = GameSnapshot::default();
    snap.destruction_active = true;
    snap.destruction_remaining_ms = 3_450;

    let fb = GameView::default().render(&snap, Viewport::new(80, 27));
    assert!(text(&fb).contains("DESTROY 3.4s"));
}

#[test]
fn term_view_overlays_game_over() {
    let mut snap = GameSnapshot::default();
    snap.snake = vec![Pos::new(17, 5)];
    snap.phase = Phase::Ended(DeathCause::Wall);

    let fb = GameView::default().render(&snap, FRAME);
    let all = text(&fb);

    assert!(all.contains("GAME OVER"));
    assert!(all.contains(DeathCause::Wall.as_str()));
    assert!(all.contains("press Enter"));
}

#[test]
fn term_view_centers_in_large_viewport() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(48, 37));
    assert_eq!(ch(&fb, 5, 5), '┌');
    assert_eq!(ch(&fb, 42, 31), '┘');
}
