use blackjack_rs::agents::{ScriptedAgent, ThresholdAgent};
use blackjack_rs::cards::{parse_cards, Card};
use blackjack_rs::deck::Deck;
use blackjack_rs::engine::{Decision, TableObserver, TableView};
use blackjack_rs::game::{Game, Phase, RoundResult};

/// Deals in order dealer, player, dealer, player, then the rest.
fn stacked(cards: &str) -> Game {
    Game::with_deck(Deck::from_cards(parse_cards(cards).unwrap()).unwrap(), 11)
}

#[derive(Default)]
struct Recorder {
    frames: Vec<(Vec<Card>, Vec<Card>, bool)>,
}

impl TableObserver for Recorder {
    fn render(&mut self, table: &TableView<'_>) {
        self.frames.push((table.dealer.to_vec(), table.player.to_vec(), table.dealer_hidden));
    }
}

#[test]
fn player_natural_beats_dealer() {
    let mut game = stacked("10♠ A♥ 9♠ K♥");
    let mut agent = ScriptedAgent::standing();
    let mut rec = Recorder::default();
    assert_eq!(game.run_round(&mut agent, &mut rec), RoundResult::PlayerBlackjack);
    assert_eq!(agent.asked(), 0);
    assert_eq!(rec.frames.len(), 2);
    assert!(rec.frames[0].2, "first render hides the hole card");
    assert!(!rec.frames[1].2, "dealer is revealed on a natural");
}

#[test]
fn both_naturals_tie() {
    let mut game = stacked("A♠ A♥ K♠ Q♥");
    assert_eq!(game.run_round(&mut ScriptedAgent::standing(), &mut ()), RoundResult::Tie);
    assert!(!game.dealer_hidden());
}

#[test]
fn dealer_natural_wins() {
    let mut game = stacked("A♠ 9♥ J♠ 9♦");
    assert_eq!(game.run_round(&mut ScriptedAgent::standing(), &mut ()), RoundResult::HouseBlackjack);
    assert_eq!(game.player_cards().len(), 2);
}

#[test]
fn player_bust_skips_dealer_turn() {
    // dealer 10♠ 5♠ = 15 would have to draw; player 10♥ 6♥ hits Q♦
    let mut game = stacked("10♠ 10♥ 5♠ 6♥ Q♦ 2♣");
    let mut agent = ScriptedAgent::new([Decision::Hit, Decision::Hit]);
    let mut rec = Recorder::default();
    assert_eq!(game.run_round(&mut agent, &mut rec), RoundResult::HouseWin);
    assert_eq!(game.player_score(), 26);
    assert_eq!(game.dealer_cards().len(), 2);
    assert_eq!(agent.asked(), 1, "no decision is asked for after a bust");
    assert!(rec.frames.iter().all(|f| f.2), "dealer stays hidden");
}

#[test]
fn dealer_on_sixteen_draws_exactly_one() {
    let mut game = stacked("6♠ 10♥ 10♠ 9♥ 2♦ 5♣");
    let result = game.run_round(&mut ScriptedAgent::standing(), &mut ());
    assert_eq!(game.dealer_cards(), parse_cards("6♠ 10♠ 2♦").unwrap().as_slice());
    assert_eq!(game.dealer_score(), 18);
    assert_eq!(result, RoundResult::PlayerWin);
}

#[test]
fn dealer_stops_at_seventeen_even_when_behind() {
    // dealer soft 17 (A♠ 6♠) stands; player 10♥ 10♦ = 20
    let mut game = stacked("A♠ 10♥ 6♠ 10♦ 2♣");
    assert_eq!(game.run_round(&mut ScriptedAgent::standing(), &mut ()), RoundResult::PlayerWin);
    assert_eq!(game.dealer_cards().len(), 2);
}

#[test]
fn dealer_bust_pays_player() {
    let mut game = stacked("10♠ 10♥ 6♠ 2♥ K♦");
    assert_eq!(game.run_round(&mut ScriptedAgent::standing(), &mut ()), RoundResult::PlayerWin);
    assert_eq!(game.dealer_score(), 26);
}

#[test]
fn dealer_higher_wins() {
    let mut game = stacked("10♠ 10♥ 9♠ 8♥");
    assert_eq!(game.run_round(&mut ScriptedAgent::standing(), &mut ()), RoundResult::HouseWin);
}

#[test]
fn stand_at_eighteen_against_dealer_seventeen() {
    let mut game = stacked("10♠ 9♥ 7♠ 9♦");
    let mut rec = Recorder::default();
    assert_eq!(game.run_round(&mut ScriptedAgent::standing(), &mut rec), RoundResult::PlayerWin);
    assert_eq!(game.dealer_cards().len(), 2, "dealer on 17 draws nothing");
    // deal render + reveal render
    assert_eq!(rec.frames.len(), 2);
    assert!(!rec.frames[1].2);
}

#[test]
fn hands_reset_between_rounds() {
    let mut game = Game::with_seed(2024);
    for round in 1..=30 {
        game.run_round(&mut ThresholdAgent::dealer_rules(), &mut ());
        assert_eq!(game.phase(), Phase::Settled);
        assert_eq!(game.rounds_played(), 2 * round - 1);
        game.start_round().unwrap();
        assert_eq!(game.player_cards().len(), 2);
        assert_eq!(game.dealer_cards().len(), 2);
        if game.phase() == Phase::PlayerTurn {
            game.stand().unwrap();
            while game.phase() == Phase::DealerTurn {
                game.dealer_step().unwrap();
            }
        }
    }
    assert!(game.reshuffles() > 0, "sixty rounds run through more than one deck");
}

#[test]
fn same_seed_same_rounds() {
    let play = |seed| {
        let mut g = Game::with_seed(seed);
        (0..10)
            .map(|_| {
                let r = g.run_round(&mut ThresholdAgent::new(15), &mut ());
                (r, g.player_cards().to_vec(), g.dealer_cards().to_vec())
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(play(77), play(77));
}
