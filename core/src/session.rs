use alloc::collections::VecDeque;
use core::time::Duration;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::*;

/// Represents one table from round to round: the board, the turn clock, the round state and the queue of events
/// waiting for the renderer.
///
/// Every transition goes through `&mut self`, so clock ticks, human moves and the queued opponent move can never
/// interleave.
#[derive(Clone, Debug)]
pub struct GameSession<G = RandomMinefieldGenerator> {
    config: GameConfig,
    generator: G,
    rng: SmallRng,
    board: Board,
    turn: TurnController,
    state: RoundState,
    events: VecDeque<GameEvent>,
    outcome_acknowledged: bool,
    rounds_started: u32,
}

impl GameSession<RandomMinefieldGenerator> {
    /// Starts the first round with randomly placed mines, reproducible from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMinefieldGenerator, seed)
    }
}

impl<G: MinefieldGenerator> GameSession<G> {
    pub fn with_generator(config: GameConfig, mut generator: G, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = build_board(&config, &mut generator, &mut rng)?;

        let mut session = Self {
            config,
            generator,
            rng,
            board,
            turn: TurnController::new(config.opponent_delay()),
            state: RoundState::InProgress,
            events: VecDeque::new(),
            outcome_acknowledged: false,
            rounds_started: 0,
        };
        session.announce_round();
        Ok(session)
    }

    /// Throws the current round away and deals a fresh one with the same configuration.
    pub fn restart(&mut self) -> Result<()> {
        self.restart_with(self.config)
    }

    /// Throws the current round away and deals a fresh one, e.g. after the mine count was changed. On error the
    /// current round is left untouched.
    pub fn restart_with(&mut self, config: GameConfig) -> Result<()> {
        let board = build_board(&config, &mut self.generator, &mut self.rng)?;

        self.config = config;
        self.board = board;
        self.turn = TurnController::new(config.opponent_delay());
        self.state = RoundState::InProgress;
        self.outcome_acknowledged = false;
        self.announce_round();
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_final()
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn.state()
    }

    pub fn current_player(&self) -> PlayerId {
        self.turn.current_player()
    }

    pub fn seconds_left(&self) -> u8 {
        self.turn.seconds_left()
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Snapshot for drawing, mines are only exposed once the round is over.
    pub fn view(&self) -> BoardView {
        BoardView::from_board(&self.board, self.state.is_final())
    }

    /// Takes every event queued since the last call, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Lets the renderer report that its end-of-round effect finished. Returns `false` while the round is still
    /// being played.
    pub fn acknowledge_outcome(&mut self) -> bool {
        if self.state.is_final() {
            self.outcome_acknowledged = true;
        }
        self.outcome_acknowledged
    }

    pub fn outcome_acknowledged(&self) -> bool {
        self.outcome_acknowledged
    }

    /// Entry point for the human's clicks: only accepted while it is their turn and their clock is running.
    pub fn human_move(&mut self, coords: Coord2) -> MoveOutcome {
        if self.turn.current_player() != PlayerId::Human
            || self.turn.state() != TurnState::CountingDown
        {
            log::debug!("Ignoring human move at {:?}, not their turn", coords);
            return MoveOutcome::Ignored;
        }
        self.resolve_move(coords)
    }

    /// Plays `coords` for whoever's turn it is.
    pub fn resolve_move(&mut self, coords: Coord2) -> MoveOutcome {
        if self.state.is_final() {
            log::debug!("Ignoring move at {:?}, round already ended", coords);
            return MoveOutcome::Ignored;
        }

        let player = self.turn.current_player();
        match self.board.claim(coords, player) {
            Err(GameError::IsMine) => {
                log::debug!("{:?} hit a mine at {:?}", player, coords);
                self.events.push_back(GameEvent::MineHit { coords });
                self.end_round(RoundState::Lost(Loss {
                    player,
                    cause: LossCause::MineHit { coords },
                }));
                MoveOutcome::MineHit
            }
            Err(err) => {
                log::debug!("Ignoring move at {:?}: {}", coords, err);
                MoveOutcome::Ignored
            }
            Ok(()) => {
                log::debug!("{:?} claimed {:?}", player, coords);
                self.events
                    .push_back(GameEvent::CellClaimed { coords, player });

                if let Some(line) = winning_line(&self.board, coords, player) {
                    self.events.push_back(GameEvent::RoundWon { player, line });
                    self.end_round(RoundState::Won(player));
                    MoveOutcome::Won
                } else if self.board.remaining_safe_cells() == 0 {
                    self.events.push_back(GameEvent::RoundExhausted);
                    self.end_round(RoundState::Exhausted);
                    MoveOutcome::Exhausted
                } else {
                    self.complete_turn();
                    MoveOutcome::Claimed
                }
            }
        }
    }

    /// Runs the queued opponent move right away, skipping whatever is left of its delay.
    pub fn opponent_move(&mut self) -> MoveOutcome {
        if self.state.is_final() || self.turn.state() != TurnState::WaitingForMove {
            return MoveOutcome::Ignored;
        }

        match choose_move(&self.board, &mut self.rng) {
            Some(coords) => self.resolve_move(coords),
            None => {
                log::warn!("Opponent has no legal move, waiting for the turn to run out");
                self.turn.resume_countdown();
                MoveOutcome::Ignored
            }
        }
    }

    /// One second of the current player's clock passes, queued opponent or not. Running out loses the round.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.is_final() {
            return TickOutcome::Ignored;
        }

        let player = self.turn.current_player();
        let outcome = self.turn.tick();
        match outcome {
            TickOutcome::Ignored => {}
            TickOutcome::Ticked(seconds_left) => {
                self.events.push_back(GameEvent::ClockTick { seconds_left });
            }
            TickOutcome::Expired => {
                self.events
                    .push_back(GameEvent::ClockTick { seconds_left: 0 });
                self.events.push_back(GameEvent::TurnTimeout { player });
                self.end_round(RoundState::Lost(Loss {
                    player,
                    cause: LossCause::Timeout,
                }));
            }
        }
        outcome
    }

    /// Lets `elapsed` wall-clock time pass, firing every clock tick and queued opponent move that falls due, in
    /// order.
    pub fn advance(&mut self, elapsed: Duration) {
        let mut remaining = elapsed;

        while let Some(due) = self.turn.next_deadline() {
            if due > remaining {
                self.turn.elapse(remaining);
                return;
            }
            self.turn.elapse(due);
            remaining -= due;

            // a move landing on the same instant as the last tick still counts
            if self.turn.opponent_due() {
                self.opponent_move();
            } else {
                self.tick();
            }
        }
    }

    fn complete_turn(&mut self) {
        let player = self.turn.complete_turn();
        self.events.push_back(GameEvent::TurnStarted {
            player,
            seconds_left: self.turn.seconds_left(),
        });

        if self.turn.opponent_due() {
            self.opponent_move();
        }
    }

    fn end_round(&mut self, state: RoundState) {
        self.state = state;
        self.turn.finish();
        self.events.push_back(GameEvent::MinesRevealed {
            mines: self.board.mine_coords(),
        });
        log::debug!("Round {} ended: {:?}", self.rounds_started, state);
    }

    fn announce_round(&mut self) {
        self.rounds_started += 1;
        log::debug!(
            "Round {} started on {}x{} board with {} mines",
            self.rounds_started,
            self.config.size,
            self.config.size,
            self.config.mines
        );
        self.events.push_back(GameEvent::BoardInitialized { board: self.view() });
        self.events.push_back(GameEvent::TurnStarted {
            player: self.turn.current_player(),
            seconds_left: self.turn.seconds_left(),
        });
    }
}

fn build_board<G: MinefieldGenerator>(
    config: &GameConfig,
    generator: &mut G,
    rng: &mut SmallRng,
) -> Result<Board> {
    config.validate()?;
    let mut board = Board::initialize(config.size, config.mines)?;
    generator.populate(&mut board, rng)?;
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn scripted(mines: &[Coord2]) -> GameSession<FixedMinefieldGenerator> {
        let config = GameConfig::new(4, mines.len() as CellCount)
            .unwrap()
            .with_opponent_delay_ms(400);
        GameSession::with_generator(config, FixedMinefieldGenerator::new(mines), 1).unwrap()
    }

    fn events(session: &mut GameSession<FixedMinefieldGenerator>) -> Vec<GameEvent> {
        session.drain_events().collect()
    }

    #[test]
    fn new_round_announces_board_and_human_turn() {
        let mut session = scripted(&[(1, 1), (2, 2)]);

        assert_eq!(session.state(), RoundState::InProgress);
        assert_eq!(session.current_player(), PlayerId::Human);
        assert_eq!(session.turn_state(), TurnState::CountingDown);
        assert_eq!(session.seconds_left(), TURN_SECONDS);

        let events = events(&mut session);
        assert!(matches!(&events[0], GameEvent::BoardInitialized { board } if board.mines == 2));
        assert_eq!(
            events[1],
            GameEvent::TurnStarted {
                player: PlayerId::Human,
                seconds_left: TURN_SECONDS
            }
        );
        assert!(!session.has_events());
    }

    #[test]
    fn bad_config_refuses_to_start() {
        let config = GameConfig {
            mines: 16,
            ..Default::default()
        };
        assert!(matches!(
            GameSession::new(config, 0),
            Err(GameError::TooManyMines)
        ));
    }

    #[test]
    fn safe_claim_passes_turn_to_opponent() {
        let mut session = scripted(&[(1, 1), (2, 2)]);
        session.drain_events().for_each(drop);

        assert_eq!(session.human_move((0, 0)), MoveOutcome::Claimed);
        assert_eq!(session.current_player(), PlayerId::Opponent);
        assert_eq!(session.turn_state(), TurnState::WaitingForMove);
        assert_eq!(
            events(&mut session),
            [
                GameEvent::CellClaimed {
                    coords: (0, 0),
                    player: PlayerId::Human
                },
                GameEvent::TurnStarted {
                    player: PlayerId::Opponent,
                    seconds_left: TURN_SECONDS
                },
            ]
        );

        assert_eq!(session.opponent_move(), MoveOutcome::Claimed);
        assert_eq!(session.current_player(), PlayerId::Human);
        assert_eq!(session.board().claimed_count(), 2);
    }

    #[test]
    fn invalid_moves_are_silently_ignored() {
        let mut session = scripted(&[(1, 1)]);
        session.human_move((0, 0));
        session.opponent_move();
        session.drain_events().for_each(drop);

        assert_eq!(session.human_move((0, 0)), MoveOutcome::Ignored);
        assert_eq!(session.human_move((4, 0)), MoveOutcome::Ignored);
        assert_eq!(session.state(), RoundState::InProgress);
        assert_eq!(session.current_player(), PlayerId::Human);
        assert!(!session.has_events());
    }

    #[test]
    fn human_clicks_during_opponent_turn_are_ignored() {
        let mut session = scripted(&[(1, 1)]);
        session.human_move((0, 0));

        assert_eq!(session.human_move((3, 3)), MoveOutcome::Ignored);
        assert_eq!(session.board()[(3, 3)].claimed_by, None);
    }

    #[test]
    fn mine_hit_loses_and_leaves_cell_unclaimed() {
        let mut session = scripted(&[(1, 1), (2, 2)]);
        session.drain_events().for_each(drop);

        assert_eq!(session.human_move((1, 1)), MoveOutcome::MineHit);
        assert_eq!(
            session.state(),
            RoundState::Lost(Loss {
                player: PlayerId::Human,
                cause: LossCause::MineHit { coords: (1, 1) }
            })
        );
        assert_eq!(session.board()[(1, 1)].claimed_by, None);
        assert_eq!(session.turn_state(), TurnState::RoundOver);
        assert_eq!(
            events(&mut session),
            [
                GameEvent::MineHit { coords: (1, 1) },
                GameEvent::MinesRevealed {
                    mines: alloc::vec![(1, 1), (2, 2)]
                },
            ]
        );
        assert_eq!(session.view().cell((2, 2)), Some(CellView::Mine));
    }

    #[test]
    fn finished_round_is_frozen() {
        let mut session = scripted(&[(1, 1)]);
        session.human_move((1, 1));
        session.drain_events().for_each(drop);

        assert_eq!(session.resolve_move((0, 0)), MoveOutcome::Ignored);
        assert_eq!(session.tick(), TickOutcome::Ignored);
        session.advance(Duration::from_secs(30));
        assert!(!session.has_events());
        assert_eq!(session.board().claimed_count(), 0);
    }

    #[test]
    fn clock_runs_out_into_loss() {
        let mut session = scripted(&[(1, 1), (2, 2)]);
        session.drain_events().for_each(drop);

        for expected in (1..TURN_SECONDS).rev() {
            assert_eq!(session.tick(), TickOutcome::Ticked(expected));
            assert_eq!(session.seconds_left(), expected);
        }
        assert_eq!(session.tick(), TickOutcome::Expired);

        assert_eq!(
            session.state(),
            RoundState::Lost(Loss {
                player: PlayerId::Human,
                cause: LossCause::Timeout
            })
        );
        let events = events(&mut session);
        assert!(events.contains(&GameEvent::TurnTimeout {
            player: PlayerId::Human
        }));
        assert!(matches!(events.last(), Some(GameEvent::MinesRevealed { mines }) if mines.len() == 2));
        assert_eq!(session.view().cell((1, 1)), Some(CellView::Mine));
    }

    #[test]
    fn clock_resets_every_turn() {
        let mut session = scripted(&[(1, 1)]);
        session.tick();
        session.tick();
        assert_eq!(session.seconds_left(), TURN_SECONDS - 2);

        session.human_move((0, 0));
        assert_eq!(session.seconds_left(), TURN_SECONDS);
        session.opponent_move();
        assert_eq!(session.seconds_left(), TURN_SECONDS);
    }

    #[test]
    fn advance_drives_ticks_and_opponent_in_order() {
        let mut session = scripted(&[(1, 1), (2, 2)]);
        session.advance(Duration::from_millis(2500));
        assert_eq!(session.seconds_left(), TURN_SECONDS - 2);

        session.human_move((0, 0));
        session.drain_events().for_each(drop);

        session.advance(Duration::from_millis(399));
        assert_eq!(session.current_player(), PlayerId::Opponent);
        assert_eq!(session.board().claimed_count(), 1);

        // 1ms fires the opponent, the remaining second ticks the human's fresh clock
        session.advance(Duration::from_millis(1001));
        assert_eq!(session.current_player(), PlayerId::Human);
        assert_eq!(session.board().claimed_count(), 2);
        assert_eq!(session.seconds_left(), TURN_SECONDS - 1);

        let events = events(&mut session);
        assert!(matches!(events[0], GameEvent::CellClaimed { player: PlayerId::Opponent, .. }));
        assert_eq!(events.last(), Some(&GameEvent::ClockTick { seconds_left: 9 }));
    }

    #[test]
    fn advance_past_turn_length_times_out() {
        let mut session = scripted(&[(1, 1)]);
        session.advance(Duration::from_secs(60));

        assert!(matches!(
            session.state(),
            RoundState::Lost(Loss {
                cause: LossCause::Timeout,
                ..
            })
        ));
    }

    #[test]
    fn slow_opponent_loses_on_time() {
        let config = GameConfig::new(4, 2).unwrap().with_opponent_delay_ms(12_000);
        let mut session =
            GameSession::with_generator(config, FixedMinefieldGenerator::new(&[(1, 1), (2, 2)]), 1)
                .unwrap();
        session.human_move((0, 0));
        session.drain_events().for_each(drop);

        session.advance(Duration::from_millis(9500));
        assert_eq!(session.state(), RoundState::InProgress);
        assert_eq!(session.turn_state(), TurnState::WaitingForMove);
        assert_eq!(session.seconds_left(), 1);

        session.advance(Duration::from_secs(1));
        assert_eq!(
            session.state(),
            RoundState::Lost(Loss {
                player: PlayerId::Opponent,
                cause: LossCause::Timeout
            })
        );
        assert_eq!(session.board().claimed_count(), 1);

        let events = events(&mut session);
        let ticks: Vec<u8> = events
            .iter()
            .filter_map(|event| match event {
                GameEvent::ClockTick { seconds_left } => Some(*seconds_left),
                _ => None,
            })
            .collect();
        assert_eq!(ticks, (0..TURN_SECONDS).rev().collect::<Vec<_>>());
        assert!(events.contains(&GameEvent::TurnTimeout {
            player: PlayerId::Opponent
        }));
    }

    #[test]
    fn opponent_due_with_the_last_tick_still_moves() {
        let config = GameConfig::new(4, 1)
            .unwrap()
            .with_opponent_delay_ms(u32::from(TURN_SECONDS) * 1000);
        let mut session =
            GameSession::with_generator(config, FixedMinefieldGenerator::new(&[(1, 1)]), 1).unwrap();
        session.human_move((0, 0));

        session.advance(Duration::from_secs(TURN_SECONDS.into()));
        assert_eq!(session.state(), RoundState::InProgress);
        assert_eq!(session.current_player(), PlayerId::Human);
        assert_eq!(session.board().claimed_count(), 2);
        assert_eq!(session.seconds_left(), TURN_SECONDS);
    }

    #[test]
    fn zero_delay_opponent_answers_immediately() {
        let config = GameConfig::new(4, 1).unwrap().with_opponent_delay_ms(0);
        let mut session =
            GameSession::with_generator(config, FixedMinefieldGenerator::new(&[(3, 3)]), 5)
                .unwrap();

        assert_eq!(session.human_move((0, 0)), MoveOutcome::Claimed);
        assert_eq!(session.current_player(), PlayerId::Human);
        assert_eq!(session.turn_state(), TurnState::CountingDown);
        assert_eq!(session.board().claimed_count(), 2);
    }

    #[test]
    fn exhausted_board_ends_round() {
        // 2x2 with one mine: three safe cells, never three in a row for one player
        let config = GameConfig::new(2, 1).unwrap();
        let mut session =
            GameSession::with_generator(config, FixedMinefieldGenerator::new(&[(1, 1)]), 0)
                .unwrap();

        assert_eq!(session.resolve_move((0, 0)), MoveOutcome::Claimed);
        assert_eq!(session.resolve_move((0, 1)), MoveOutcome::Claimed);
        assert_eq!(session.resolve_move((1, 0)), MoveOutcome::Exhausted);
        assert_eq!(session.state(), RoundState::Exhausted);
        assert_eq!(session.board().remaining_safe_cells(), 0);
        assert_eq!(session.opponent_move(), MoveOutcome::Ignored);
    }

    #[test]
    fn resolve_move_claims_for_current_player() {
        let mut session = scripted(&[(1, 1)]);
        session.resolve_move((0, 0));
        session.resolve_move((3, 3));

        assert_eq!(session.board()[(3, 3)].claimed_by, Some(PlayerId::Opponent));
        assert_eq!(session.turn_state(), TurnState::CountingDown);
    }

    #[test]
    fn human_wins_on_top_row() {
        let mut session = scripted(&[(1, 1), (2, 2)]);

        for col in 0..3 {
            assert_eq!(session.current_player(), PlayerId::Human);
            let outcome = session.human_move((0, col));
            if col < 2 {
                assert_eq!(outcome, MoveOutcome::Claimed);
                // keep the opponent off row 0
                session.resolve_move((3, col));
            } else {
                assert_eq!(outcome, MoveOutcome::Won);
            }
        }

        assert_eq!(session.state(), RoundState::Won(PlayerId::Human));
        assert_eq!(session.turn_state(), TurnState::RoundOver);
        let won = session
            .drain_events()
            .find_map(|event| match event {
                GameEvent::RoundWon { player, line } => Some((player, line)),
                _ => None,
            })
            .unwrap();
        assert_eq!(won.0, PlayerId::Human);
        assert_eq!(won.1.cells.as_slice(), &[(0, 0), (0, 1), (0, 2)]);
    }

    #[test]
    fn random_opponent_game_plays_to_a_clean_finish() {
        let mut session = scripted(&[(1, 1), (2, 2)]);

        for _ in 0..32 {
            if session.is_finished() {
                break;
            }
            match session.current_player() {
                PlayerId::Human => {
                    let board = session.board();
                    let target = (0..4)
                        .map(|col| (0, col))
                        .find(|&coords| board[coords].is_open())
                        .or_else(|| board.open_coords().first().copied())
                        .unwrap();
                    assert!(session.human_move(target).has_update());
                }
                PlayerId::Opponent => {
                    assert!(session.opponent_move().has_update());
                }
            }
        }

        assert!(session.is_finished());
        assert!(!matches!(session.state(), RoundState::Lost(_)));
        for (coords, cell) in session.board().iter_cells() {
            if cell.mine {
                assert_eq!(cell.claimed_by, None, "mine at {coords:?} was claimed");
            }
        }
    }

    #[test]
    fn human_wins_row_zero_against_random_opponent() {
        let top_row = [(0, 0), (0, 1), (0, 2)];
        let mut wins = 0;

        for seed in 0..32 {
            let mut session = GameSession::with_generator(
                GameConfig::new(4, 2).unwrap(),
                FixedMinefieldGenerator::new(&[(1, 1), (2, 2)]),
                seed,
            )
            .unwrap();

            for coords in top_row {
                if !session.board()[coords].is_open() {
                    break;
                }
                session.human_move(coords);
                // lets the queued opponent move fire
                session.advance(Duration::from_millis(400));
            }

            for (coords, cell) in session.board().iter_cells() {
                if cell.claimed_by == Some(PlayerId::Opponent) {
                    assert!(!cell.mine, "opponent claimed mine at {coords:?}");
                }
            }
            let opponent_blocked = top_row
                .iter()
                .any(|&coords| session.board()[coords].claimed_by == Some(PlayerId::Opponent));
            if opponent_blocked {
                assert_eq!(session.state(), RoundState::InProgress, "seed {seed}");
                continue;
            }

            assert_eq!(session.state(), RoundState::Won(PlayerId::Human), "seed {seed}");
            let line = session
                .drain_events()
                .find_map(|event| match event {
                    GameEvent::RoundWon {
                        player: PlayerId::Human,
                        line,
                    } => Some(line),
                    _ => None,
                })
                .unwrap();
            assert_eq!(line.cells.as_slice(), &top_row);
            assert_eq!(session.view().cell((1, 1)), Some(CellView::Mine));
            wins += 1;
        }

        assert!(wins > 0);
    }

    #[test]
    fn restart_resets_everything() {
        let mut session = GameSession::new(GameConfig::default(), 99).unwrap();
        session.advance(Duration::from_secs(11));
        assert!(session.is_finished());
        assert!(session.acknowledge_outcome());

        session
            .restart_with(GameConfig::new(4, 5).unwrap())
            .unwrap();
        assert_eq!(session.state(), RoundState::InProgress);
        assert_eq!(session.current_player(), PlayerId::Human);
        assert_eq!(session.seconds_left(), TURN_SECONDS);
        assert_eq!(session.board().mine_coords().len(), 5);
        assert_eq!(session.board().claimed_count(), 0);
        assert_eq!(session.rounds_started(), 2);
        assert!(!session.outcome_acknowledged());
    }

    #[test]
    fn failed_restart_keeps_current_round() {
        let mut session = scripted(&[(1, 1)]);
        session.human_move((0, 0));

        let config = GameConfig::new(4, 3).unwrap();
        assert_eq!(session.restart_with(config), Err(GameError::MineLayoutMismatch));
        assert_eq!(session.board().claimed_count(), 1);
        assert_eq!(session.config().mines, 1);
    }

    #[test]
    fn acknowledgement_needs_finished_round() {
        let mut session = scripted(&[(1, 1)]);
        assert!(!session.acknowledge_outcome());

        session.human_move((1, 1));
        assert!(session.acknowledge_outcome());
        assert!(session.outcome_acknowledged());
    }

    #[test]
    fn same_seed_same_round() {
        let a = GameSession::new(GameConfig::default(), 1234).unwrap();
        let b = GameSession::new(GameConfig::default(), 1234).unwrap();

        assert_eq!(a.board().mine_coords(), b.board().mine_coords());
    }
}
