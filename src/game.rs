use ggez::{
    Context, GameResult, event,
    glam::*,
    graphics::{Canvas, DrawMode, Mesh, MeshBuilder},
    input::mouse::MouseButton,
};

use crate::{
    constants::BACKGROUND,
    logic::{Session, StateChange},
    render::{self, Shape},
};

/// Build a mesh from the renderer's shapes.
fn mesh(ctx: &Context, shapes: &[Shape]) -> GameResult<Mesh> {
    let mut mb = MeshBuilder::new();

    for shape in shapes {
        match *shape {
            Shape::Square { rect, color } => {
                mb.rectangle(DrawMode::fill(), rect, color)?;
            }
            Shape::Circle {
                center,
                radius,
                color,
            } => {
                mb.circle(DrawMode::fill(), center, radius, 1., color)?;
            }
        }
    }

    Ok(Mesh::from_data(ctx, mb.build()))
}

pub struct GameState {
    board_mesh: Mesh,
    pieces_mesh: Mesh,
    session: Session,
}

impl GameState {
    pub fn new(ctx: &mut Context) -> GameResult<GameState> {
        let board_mesh = mesh(ctx, &render::tiles())?;
        let session = Session::default();
        let pieces_mesh = mesh(ctx, &render::pieces(session.board()))?;

        Ok(GameState {
            board_mesh,
            pieces_mesh,
            session,
        })
    }
}

impl event::EventHandler for GameState {
    fn update(&mut self, _ctx: &mut Context) -> GameResult {
        Ok(())
    }

    fn mouse_button_down_event(
        &mut self,
        ctx: &mut Context,
        _button: MouseButton,
        x: f32,
        y: f32,
    ) -> GameResult {
        for state_change in self.session.handle_click(x, y).unwrap_or_default() {
            // selection is not drawn, only moves change the picture
            if let StateChange::PieceMoved(_) = state_change {
                self.pieces_mesh = mesh(ctx, &render::pieces(self.session.board()))?;
            }
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, BACKGROUND);

        canvas.draw(&self.board_mesh, Vec2::ZERO);
        canvas.draw(&self.pieces_mesh, Vec2::ZERO);

        canvas.finish(ctx)?;

        Ok(())
    }
}
