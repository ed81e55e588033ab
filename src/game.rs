use crate::board::Board;
use crate::config::Settings;
use crate::draw::{Draw, Rgba};
use crate::fruit::Fruit;
use crate::game_loop::Stage;
use crate::input::Input;
use crate::pos::Pos;
use crate::snake::Snake;
use log::{debug, trace};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    FruitEaten { score: usize },
    /// Terminal; the game ignores every update after this one.
    Collision { score: usize, length: usize },
}

/// One round: a snake, at most one fruit, and the board they live on.
pub struct Game {
    board: Board,
    snake: Snake,
    fruit: Option<Fruit>,
    fruit_color: Rgba,
    background: Rgba,
    alive: bool,
    score: usize,
    rng: SmallRng,
}

impl Game {
    pub fn new(settings: &Settings, board: Board) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let snake = Snake::new(board.random_pos(&mut rng), settings.snake_color);
        let fruit = Fruit::spawn(&board, settings.fruit_color, &mut rng);
        Self {
            board,
            snake,
            fruit: Some(fruit),
            fruit_color: settings.fruit_color,
            background: settings.background,
            alive: true,
            score: 0,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruit(&self) -> Option<&Fruit> {
        self.fruit.as_ref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    fn respawn_fruit(&mut self) {
        self.fruit = Some(Fruit::spawn(&self.board, self.fruit_color, &mut self.rng));
    }
}

impl Stage for Game {
    type Event = GameEvent;

    fn update(&mut self, input: &Input, elapsed: Duration) -> Option<GameEvent> {
        if !self.alive {
            return None;
        }
        trace!("tick after {elapsed:?}, heading {:?}", input.heading);

        self.snake.update(input.heading, &self.board);

        if self.snake.bit_itself() {
            self.alive = false;
            return Some(GameEvent::Collision { score: self.score, length: self.snake.len() });
        }

        match self.fruit {
            Some(fruit) if fruit.pos == self.snake.head() => {
                self.fruit = None;
                self.snake.grow();
                self.score += 1;
                self.respawn_fruit();
                debug!("ate fruit at {:?}, score {}", fruit.pos, self.score);
                Some(GameEvent::FruitEaten { score: self.score })
            }
            Some(_) => None,
            None => {
                self.respawn_fruit();
                None
            }
        }
    }

    fn render(&self, out: &mut Vec<Draw>) {
        let cell = self.board.cell;
        let rect = |p: Pos, color: Rgba| Draw::Rect {
            x: p.x * cell as i32,
            y: p.y * cell as i32,
            w: cell,
            h: cell,
            color,
        };

        out.push(Draw::Clear(self.background));
        out.extend(self.snake.pieces().iter().map(|&p| rect(p, self.snake.color)));
        if let Some(fruit) = &self.fruit {
            out.push(rect(fruit.pos, fruit.color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::Dir;

    fn settings() -> Settings {
        Settings { columns: 10, rows: 8, seed: Some(7), ..Settings::default() }
    }

    fn game_with(snake: Snake, fruit: Option<Fruit>) -> Game {
        let s = settings();
        let mut game = Game::new(&s, s.board());
        game.snake = snake;
        game.fruit = fruit;
        game
    }

    fn heading(dir: Dir) -> Input {
        Input { heading: Some(dir) }
    }

    const DT: Duration = Duration::from_millis(500);

    #[test]
    fn new_game_has_snake_and_fruit_on_board() {
        let s = settings();
        let game = Game::new(&s, s.board());
        assert!(game.is_alive());
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake().len(), 1);
        assert!(game.board().contains(game.snake().head()));
        assert!(game.board().contains(game.fruit().unwrap().pos));
    }

    #[test]
    fn same_seed_same_layout() {
        let s = settings();
        let a = Game::new(&s, s.board());
        let b = Game::new(&s, s.board());
        assert_eq!(a.snake().head(), b.snake().head());
        assert_eq!(a.fruit(), b.fruit());
    }

    #[test]
    fn collision_fires_once_and_freezes_state() {
        let snake = Snake::with_body(Pos::new(5, 5), [Pos::new(5, 5)], Rgba::GREEN);
        let mut game = game_with(snake, Some(Fruit::new(Pos::new(0, 0), Rgba::RED)));

        let event = game.update(&Input::default(), DT);
        assert_eq!(event, Some(GameEvent::Collision { score: 0, length: 2 }));
        assert!(!game.is_alive());

        let pieces = game.snake().pieces().to_vec();
        let fruit = game.fruit().copied();
        for _ in 0..3 {
            assert_eq!(game.update(&heading(Dir::Right), DT), None);
        }
        assert_eq!(game.snake().pieces(), pieces.as_slice());
        assert_eq!(game.fruit().copied(), fruit);
    }

    #[test]
    fn turning_back_into_body_ends_game() {
        let snake = Snake::with_body(Pos::new(5, 5), [Pos::new(4, 5), Pos::new(3, 5)], Rgba::GREEN);
        let mut game = game_with(snake, None);
        assert_eq!(game.update(&heading(Dir::Right), DT), None);
        // head (6,5), body (5,5),(4,5): going left lands on (5,5)
        assert!(matches!(game.update(&heading(Dir::Left), DT), Some(GameEvent::Collision { .. })));
    }

    #[test]
    fn eating_fruit_grows_on_following_tick() {
        let snake = Snake::with_body(Pos::new(2, 3), [Pos::new(1, 3)], Rgba::GREEN);
        let mut game = game_with(snake, Some(Fruit::new(Pos::new(3, 3), Rgba::RED)));
        let input = heading(Dir::Right);

        let event = game.update(&input, DT);
        assert_eq!(event, Some(GameEvent::FruitEaten { score: 1 }));
        assert_eq!(game.snake().head(), Pos::new(3, 3));
        assert!(game.snake().is_growing());
        assert_eq!(game.snake().len(), 2);
        let fresh = game.fruit().expect("fruit respawns immediately");
        assert!(game.board().contains(fresh.pos));

        // keep the respawn out of the way so it is not eaten again
        game.fruit = Some(Fruit::new(Pos::new(0, 7), Rgba::RED));
        let before = game.snake().pieces().to_vec();
        game.update(&input, DT);
        assert_eq!(game.snake().len(), 3);
        assert_eq!(game.snake().pieces()[2], before[1]);
        assert!(!game.snake().is_growing());

        game.update(&input, DT);
        assert_eq!(game.snake().len(), 3);
    }

    #[test]
    fn missing_fruit_is_replaced() {
        let mut game = game_with(Snake::new(Pos::new(1, 1), Rgba::GREEN), None);
        assert_eq!(game.update(&Input::default(), DT), None);
        assert!(game.fruit().is_some());
    }

    #[test]
    fn wraps_through_left_edge() {
        let mut game = game_with(Snake::new(Pos::new(0, 4), Rgba::GREEN), None);
        game.update(&heading(Dir::Left), DT);
        assert_eq!(game.snake().head(), Pos::new(9, 4));
        game.update(&heading(Dir::Right), DT);
        assert_eq!(game.snake().head(), Pos::new(0, 4));
    }

    #[test]
    fn render_clears_then_draws_scaled_cells() {
        let snake = Snake::with_body(Pos::new(2, 1), [Pos::new(1, 1)], Rgba::GREEN);
        let game = game_with(snake, Some(Fruit::new(Pos::new(4, 5), Rgba::RED)));
        let mut out = Vec::new();
        game.render(&mut out);
        assert_eq!(
            out,
            vec![
                Draw::Clear(Rgba::BACKGROUND),
                Draw::Rect { x: 32, y: 16, w: 16, h: 16, color: Rgba::GREEN },
                Draw::Rect { x: 16, y: 16, w: 16, h: 16, color: Rgba::GREEN },
                Draw::Rect { x: 64, y: 80, w: 16, h: 16, color: Rgba::RED },
            ]
        );

        let mut again = Vec::new();
        game.render(&mut again);
        assert_eq!(out, again);
    }
}
