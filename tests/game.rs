use confab::game::{GuessGame, GuessOutcome};

#[test]
fn target_chases_the_guesser() {
    let mut game = GuessGame::with_target(7);

    assert_eq!(game.evaluate("3"), GuessOutcome::TooLow);
    assert_eq!(game.target(), 8);

    assert_eq!(game.evaluate("9"), GuessOutcome::TooHigh);
    assert_eq!(game.target(), 7);

    assert_eq!(game.evaluate("7"), GuessOutcome::Correct(7));
    assert_eq!(game.target(), 7);
}

#[test]
fn target_never_moves_past_the_upper_bound() {
    let mut game = GuessGame::with_target(10);

    assert_eq!(game.evaluate("3"), GuessOutcome::TooLow);
    assert_eq!(game.target(), 10);

    assert_eq!(game.evaluate("10"), GuessOutcome::Correct(10));
}

#[test]
fn target_never_moves_past_the_lower_bound() {
    let mut game = GuessGame::with_target(1);

    assert_eq!(game.evaluate("9"), GuessOutcome::TooHigh);
    assert_eq!(game.target(), 1);

    assert_eq!(game.evaluate("1"), GuessOutcome::Correct(1));
}

#[test]
fn adjustment_happens_after_the_comparison() {
    let mut game = GuessGame::with_target(5);

    // The outcome is judged against the pre-adjustment target; only the
    // next guess sees the shifted value.
    assert_eq!(game.evaluate("9"), GuessOutcome::TooHigh);
    assert_eq!(game.target(), 4);
    assert_eq!(game.evaluate("4"), GuessOutcome::Correct(4));
}

#[test]
fn fractional_guesses_truncate_toward_zero() {
    let mut game = GuessGame::with_target(7);
    assert_eq!(game.evaluate("7.9"), GuessOutcome::Correct(7));

    let mut game = GuessGame::with_target(7);
    assert_eq!(game.evaluate("7.1"), GuessOutcome::Correct(7));
}

#[test]
fn non_numeric_guess_abandons_the_round() {
    let mut game = GuessGame::with_target(4);

    assert_eq!(game.evaluate("seven"), GuessOutcome::NotANumber);
    assert_eq!(game.target(), 4);

    assert_eq!(game.evaluate(""), GuessOutcome::NotANumber);
    assert_eq!(game.target(), 4);
}

#[test]
fn fresh_games_draw_targets_inside_the_bounds() {
    for _ in 0..100 {
        let game = GuessGame::new();
        assert!((1..=10).contains(&game.target()));
    }
}
