use ggez::{
    GameResult,
    conf::{WindowMode, WindowSetup},
    event,
};

use checkers_board::{
    constants::{WINDOW_HEIGHT, WINDOW_WIDTH},
    game::GameState,
};

pub fn main() -> GameResult {
    env_logger::init();

    let cb = ggez::ContextBuilder::new("checkers", "checkers-board")
        .window_mode(WindowMode::default().dimensions(WINDOW_WIDTH, WINDOW_HEIGHT))
        .window_setup(WindowSetup::default().title("checkers"));

    let (mut ctx, event_loop) = cb.build()?;

    let state = GameState::new(&mut ctx)?;

    log::info!("game started, player one to move");
    event::run(ctx, event_loop, state)
}
