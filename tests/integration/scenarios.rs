//! End-to-end scenarios through the public pipeline.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use roundrobin::engine::sheet::TeamSheet;
use roundrobin::engine::{build_combinations, evaluate};
use roundrobin::strategy::generator::{available_sizes, clamp_size};
use roundrobin::strategy::settlement::settle;
use roundrobin::types::{Outcome, TeamEntry, TeamId, TeamStatus};

fn team(id: u64, name: &str, odds: &str, status: TeamStatus) -> TeamEntry {
    TeamEntry::new(TeamId(id), name, odds, status)
}

#[test]
fn test_loss_short_circuits_before_trailing_draw() {
    let teams = vec![
        team(1, "A", "2", TeamStatus::Win),
        team(2, "B", "3", TeamStatus::Lose),
        team(3, "C", "1.5", TeamStatus::Draw),
    ];
    let rr = evaluate(&teams, 3, "30");
    assert_eq!(rr.combinations.len(), 1);

    let combo = &rr.combinations[0];
    assert_eq!(combo.outcome, Outcome::Lost);
    assert_eq!(combo.outcome.is_winner(), Some(false));
    assert_eq!(combo.draw_count, 0);
    assert_eq!(combo.effective_teams, 3);
    assert_eq!(combo.total_odds, dec!(6));
    assert_eq!(settle(combo, dec!(30)), dec!(-30));
    assert_eq!(rr.summary.net_result, dec!(-30));
}

#[test]
fn test_draw_reduces_parlay() {
    let teams = vec![
        team(1, "A", "2", TeamStatus::Win),
        team(2, "B", "3", TeamStatus::Draw),
        team(3, "C", "1.5", TeamStatus::Win),
    ];
    let rr = evaluate(&teams, 3, "9");
    let combo = &rr.combinations[0];
    assert_eq!(combo.outcome, Outcome::Won);
    assert_eq!(combo.draw_count, 1);
    assert_eq!(combo.effective_teams, 2);
    assert_eq!(combo.total_odds, dec!(3));
    assert_eq!(settle(combo, dec!(9)), dec!(18));
    assert_eq!(rr.summary.total_win, dec!(18));
}

#[test]
fn test_all_draws_push() {
    let teams = vec![
        team(1, "A", "2", TeamStatus::Draw),
        team(2, "B", "3", TeamStatus::Draw),
        team(3, "C", "1.5", TeamStatus::Draw),
    ];
    let rr = evaluate(&teams, 3, "50");
    let combo = &rr.combinations[0];
    assert_eq!(combo.outcome, Outcome::Won);
    assert_eq!(combo.effective_teams, 0);
    assert_eq!(settle(combo, dec!(50)), Decimal::ZERO);
    assert_eq!(rr.summary.winning_combinations, 1);
    assert_eq!(rr.summary.net_result, Decimal::ZERO);
}

#[test]
fn test_unset_leg_keeps_combination_pending() {
    let teams = vec![
        team(1, "A", "2", TeamStatus::Draw),
        team(2, "B", "3", TeamStatus::Unset),
        team(3, "C", "1.5", TeamStatus::Lose),
    ];
    let rr = evaluate(&teams, 3, "50");
    let combo = &rr.combinations[0];
    assert_eq!(combo.outcome.is_winner(), None);
    assert_eq!(combo.draw_count, 0);
    assert_eq!(settle(combo, dec!(50)), Decimal::ZERO);
    assert_eq!(rr.summary.pending_combinations, 1);
}

#[test]
fn test_available_sizes_for_five() {
    let sizes: Vec<(usize, u64)> = available_sizes(5).iter().map(|o| (o.size, o.count)).collect();
    assert_eq!(sizes, vec![(2, 10), (3, 10), (4, 5)]);
}

#[test]
fn test_pipeline_is_idempotent() {
    let teams = vec![
        team(1, "A", "1.9", TeamStatus::Win),
        team(2, "B", "2.1", TeamStatus::Lose),
        team(3, "C", "2.5", TeamStatus::Draw),
        team(4, "D", "1.75", TeamStatus::Win),
        team(5, "E", "3.2", TeamStatus::Unset),
    ];
    for size in 1..=5 {
        assert_eq!(evaluate(&teams, size, "100"), evaluate(&teams, size, "100"));
    }
}

#[test]
fn test_summary_conservation_across_sizes() {
    let teams = vec![
        team(1, "A", "1.9", TeamStatus::Win),
        team(2, "B", "2.1", TeamStatus::Lose),
        team(3, "C", "2.5", TeamStatus::Draw),
        team(4, "D", "1.75", TeamStatus::Win),
        team(5, "E", "3.2", TeamStatus::Win),
        team(6, "F", "", TeamStatus::Lose),
    ];
    for size in 1..=5 {
        let rr = evaluate(&teams, size, "250");
        let s = &rr.summary;
        assert!(s.total_win >= Decimal::ZERO);
        assert!(s.total_loss >= Decimal::ZERO);
        assert_eq!(s.net_result, s.total_win - s.total_loss);
        assert_eq!(
            s.winning_combinations + s.losing_combinations + s.pending_combinations,
            s.total_combinations
        );
    }
}

#[test]
fn test_enumeration_follows_creation_order() {
    let mut sheet = TeamSheet::new();
    let fourth = sheet.add_team().unwrap();
    for (id, name) in [(TeamId(1), "A"), (TeamId(2), "B"), (TeamId(3), "C"), (fourth, "D")] {
        sheet.set_name(id, name).unwrap();
        sheet.set_odds(id, "2").unwrap();
    }
    // Editing an early row later does not move it.
    sheet.set_status(TeamId(1), TeamStatus::Win).unwrap();

    let combos = build_combinations(&sheet.teams(), 3);
    let names: Vec<String> = combos.iter().map(|c| c.team_names("")).collect();
    assert_eq!(names, vec!["ABC", "ABD", "ACD", "BCD"]);
}

#[test]
fn test_live_status_updates() {
    let mut sheet = TeamSheet::new();
    for (id, name, odds) in [(1, "A", "2"), (2, "B", "3"), (3, "C", "1.5")] {
        sheet.set_name(TeamId(id), name).unwrap();
        sheet.set_odds(TeamId(id), odds).unwrap();
    }

    let rr = sheet.evaluate(2, "30");
    assert_eq!(rr.summary.pending_combinations, 3);
    assert_eq!(rr.summary.net_result, Decimal::ZERO);

    sheet.set_status(TeamId(1), TeamStatus::Win).unwrap();
    sheet.set_status(TeamId(2), TeamStatus::Win).unwrap();
    let rr = sheet.evaluate(2, "30");
    // A+B won at 6.0; A+C and B+C still waiting on C.
    assert_eq!(rr.summary.winning_combinations, 1);
    assert_eq!(rr.summary.pending_combinations, 2);
    assert_eq!(rr.summary.total_win, dec!(50));

    sheet.set_status(TeamId(3), TeamStatus::Lose).unwrap();
    let rr = sheet.evaluate(2, "30");
    assert_eq!(rr.summary.losing_combinations, 2);
    assert_eq!(rr.summary.net_result, dec!(30));
}

#[test]
fn test_size_clamped_after_removal() {
    let mut sheet = TeamSheet::new();
    let fourth = sheet.add_team().unwrap();
    let mut size = 3;
    assert!(sheet.available_sizes().iter().any(|o| o.size == size));

    sheet.remove_team(fourth).unwrap();
    size = clamp_size(size, sheet.len());
    assert_eq!(size, 2);
}
