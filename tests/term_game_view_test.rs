use snake_arcade::core::{Grid, ScreenFlow};
use snake_arcade::term::{GameView, Viewport};
use snake_arcade::types::{Command, Screen};

fn in_round() -> ScreenFlow {
    let mut flow = ScreenFlow::new(Grid::new(20, 20).unwrap(), 1);
    flow.apply(Command::SelectPlay);
    flow.apply(Command::ConfirmName);
    flow
}

#[test]
fn term_view_renders_border_corners() {
    let snap = in_round().snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // grid pixels = 20*2 by 20*1 => 40x20
    // plus border => 42x22
    let fb = view.render(&snap, Viewport::new(42, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(41, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_snake_cells_two_chars_wide() {
    let snap = in_round().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(42, 22));

    // Inside border: (1,1) origin. Head starts at grid (10,10).
    let x0 = 1 + 10 * 2;
    let y0 = 1 + 10;
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 - 2, y0).unwrap().ch, '▓');
}

#[test]
fn term_view_follows_every_screen() {
    let mut flow = ScreenFlow::new(Grid::new(20, 20).unwrap(), 1);
    let view = GameView::default();
    let viewport = Viewport::new(80, 30);

    let text = |flow: &ScreenFlow| {
        let fb = view.render(&flow.snapshot(), viewport);
        (0..fb.height()).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n")
    };

    assert!(text(&flow).contains("S N A K E"));
    flow.apply(Command::SelectRules);
    assert!(text(&flow).contains("Obstacles appear at 200 points"));
    flow.apply(Command::BackToMenu);
    flow.apply(Command::SelectPlay);
    assert!(text(&flow).contains("Enter your name:"));
    flow.apply(Command::ConfirmName);
    assert_eq!(flow.screen(), Screen::Playing);
    assert!(text(&flow).contains("SCORE 0"));
}

#[test]
fn render_into_reuses_framebuffer() {
    let flow = in_round();
    let snap = flow.snapshot();
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(50, 30));
    view.render_into(&snap, Viewport::new(42, 22), &mut fb);
    assert_eq!((fb.width(), fb.height()), (42, 22));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
