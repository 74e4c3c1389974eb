use blackjack_rs::cards::parse_cards;
use blackjack_rs::console::{self, Console};
use blackjack_rs::deck::Deck;
use blackjack_rs::game::{Game, RoundResult};
use blackjack_rs::session::{Session, TableConfig};

fn stacked_session(cards: &str, chips: u64) -> Session {
    let deck = Deck::from_cards(parse_cards(cards).unwrap()).unwrap();
    Session::with_game(Game::with_deck(deck, 3), chips)
}

fn play(input: &str, session: &mut Session) -> String {
    play_bytes(input.as_bytes(), session)
}

fn play_bytes(input: &[u8], session: &mut Session) -> String {
    let term = Console::new(input, Vec::new());
    console::play(&term, session).unwrap();
    String::from_utf8(term.into_output()).unwrap()
}

#[test]
fn stand_and_win_then_quit() {
    // dealer 10♠ 7♠ = 17, player 9♥ 9♦ = 18
    let mut session = stacked_session("10♠ 9♥ 7♠ 9♦", 100);
    let out = play("25\ns\nn\n", &mut session);
    assert!(out.contains("■■ 7♠ (7)"), "{out}");
    assert!(out.contains("10♠ 7♠ (17)"), "{out}");
    assert!(out.contains("You Win"));
    assert!(out.contains("25 added to your balance"));
    assert!(out.contains("Wallet Balance: 125"));
    assert_eq!(session.balance(), 125);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn invalid_bets_are_reprompted() {
    let mut session = stacked_session("10♠ 9♥ 7♠ 9♦", 50);
    let out = play("abc\n0\n51\n50\nstay\nno\n", &mut session);
    assert_eq!(out.matches("Invalid Value").count(), 3);
    assert_eq!(out.matches("Bet Amount: ").count(), 4);
    assert_eq!(session.history()[0].bet, 50);
}

#[test]
fn bust_loses_everything() {
    // player 10♥ 6♥ hits K♦
    let mut session = stacked_session("10♠ 10♥ 7♠ 6♥ K♦", 30);
    let out = play("30\nhit\n", &mut session);
    assert!(out.contains("Dealer Wins"));
    assert!(out.contains("30 taken from your balance"));
    assert!(out.contains("Out of money"));
    assert!(!out.contains("Keep Playing?(Y/N)"));
    assert!(session.is_over());
}

#[test]
fn blackjack_pays_double_and_tie_keeps_money() {
    // round 1: player A♥ K♥ natural; round 2: 10 vs 10 tie after standing
    let mut session = stacked_session("9♠ A♥ 8♠ K♥ 10♣ 10♦ K♣ Q♦", 100);
    let out = play("10\ny\n10\ns\nn\n", &mut session);
    assert!(out.contains("BLACKJACK!"));
    assert!(out.contains("20 added to your balance"));
    assert!(out.contains("Tie!"));
    assert!(out.contains("Everyone keeps their money"));
    let results: Vec<RoundResult> = session.history().iter().map(|r| r.result).collect();
    assert_eq!(results, vec![RoundResult::PlayerBlackjack, RoundResult::Tie]);
    assert_eq!(session.balance(), 120);
}

#[test]
fn run_prompts_for_chips_and_ends_on_eof() {
    let config = TableConfig { seed: Some(8), dealer_delay_ms: 0, ..TableConfig::default() };
    let term = Console::new("zero\n200\n".as_bytes(), Vec::new());
    let session = console::run(&term, &config).unwrap().unwrap();
    assert_eq!(session.balance(), 200);
    assert!(session.history().is_empty());
    let out = String::from_utf8(term.into_output()).unwrap();
    assert_eq!(out.matches("How many chips do you want to start with: ").count(), 2);
    assert!(out.ends_with("Bet Amount: "));
}

#[test]
fn clear_screen_emits_escape_codes() {
    let mut session = stacked_session("10♠ 9♥ 7♠ 9♦", 100);
    let term = Console::new("5\ns\nn\n".as_bytes(), Vec::new()).with_clear_screen(true);
    console::play(&term, &mut session).unwrap();
    let out = String::from_utf8(term.into_output()).unwrap();
    assert!(out.contains("\u{1b}[2J"));
}

#[test]
fn garbled_bet_line_is_reprompted() {
    let mut session = stacked_session("10♠ 9♥ 7♠ 9♦", 100);
    let out = play_bytes(b"\xff\n25\ns\nn\n", &mut session);
    assert_eq!(out.matches("Invalid Value").count(), 1);
    assert_eq!(out.matches("Bet Amount: ").count(), 2);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.balance(), 125);
}

#[test]
fn garbled_decision_line_is_asked_again() {
    // player 10♥ 6♥ hits K♦ after one unreadable answer
    let mut session = stacked_session("10♠ 10♥ 7♠ 6♥ K♦", 30);
    let out = play_bytes(b"10\n\xfe\xff\nh\nn\n", &mut session);
    assert_eq!(out.matches("Hit or Stay?(H/S)").count(), 2);
    assert_eq!(session.game().player_cards().len(), 3);
    assert_eq!(session.history()[0].result, RoundResult::HouseWin);
    assert_eq!(session.balance(), 20);
}
