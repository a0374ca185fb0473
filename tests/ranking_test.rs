use std::collections::HashMap;

use uuid::Uuid;

use livescore_backend::league::ranking::live_ranking;
use livescore_backend::models::ranking::UserTotal;

fn totals(points: &[(&str, i64)]) -> Vec<UserTotal> {
    points
        .iter()
        .map(|(userid, points)| UserTotal {
            user_id: Uuid::new_v4(),
            userid: userid.to_string(),
            display_name: userid.to_uppercase(),
            points: *points,
        })
        .collect()
}

#[test]
fn no_live_matches_keeps_final_points_order() {
    let totals = totals(&[("alice", 30), ("bob", 20), ("carol", 10)]);
    let ranking = live_ranking(&totals, &HashMap::new());

    let order: Vec<&str> = ranking.iter().map(|e| e.userid.as_str()).collect();
    assert_eq!(order, vec!["alice", "bob", "carol"]);
    assert!(ranking.iter().all(|e| e.change == 0));
    assert!(ranking.iter().all(|e| e.points_live == 0));
}

#[test]
fn combined_points_are_total_plus_live() {
    let totals = totals(&[("alice", 30), ("bob", 20), ("carol", 10)]);
    let mut live = HashMap::new();
    live.insert(totals[1].user_id, 15);
    live.insert(totals[2].user_id, 3);

    let ranking = live_ranking(&totals, &live);

    for entry in &ranking {
        let total = totals
            .iter()
            .find(|t| t.user_id == entry.user_id)
            .unwrap()
            .points;
        assert_eq!(entry.points, total + entry.points_live);
    }
}

#[test]
fn live_points_reorder_and_report_change() {
    let totals = totals(&[("alice", 30), ("bob", 20), ("carol", 10)]);
    // Bob overtakes Alice while his match is in play
    let mut live = HashMap::new();
    live.insert(totals[1].user_id, 15);

    let ranking = live_ranking(&totals, &live);

    assert_eq!(ranking[0].userid, "bob");
    assert_eq!(ranking[0].points, 35);
    assert_eq!(ranking[0].points_live, 15);
    assert_eq!(ranking[1].userid, "alice");
    assert_eq!(ranking[2].userid, "carol");
    assert_eq!(ranking[2].change, 0);
}

#[test]
fn rank_changes_sum_to_zero() {
    let totals = totals(&[("a", 40), ("b", 30), ("c", 20), ("d", 10)]);
    let mut live = HashMap::new();
    live.insert(totals[3].user_id, 50);
    live.insert(totals[2].user_id, 5);

    let ranking = live_ranking(&totals, &live);
    assert_eq!(ranking.iter().map(|e| e.change).sum::<i64>(), 0);
}

#[test]
fn equal_combined_scores_keep_pre_live_order() {
    let totals = totals(&[("alice", 30), ("bob", 25), ("carol", 25)]);
    // Carol draws level with Bob but does not pass him
    let mut live = HashMap::new();
    live.insert(totals[1].user_id, 5);
    live.insert(totals[2].user_id, 5);

    let ranking = live_ranking(&totals, &live);

    let order: Vec<&str> = ranking.iter().map(|e| e.userid.as_str()).collect();
    assert_eq!(order, vec!["alice", "bob", "carol"]);
    assert!(ranking.iter().all(|e| e.change == 0));
}

#[test]
fn zero_prediction_user_participates_with_zero_points() {
    let totals = totals(&[("alice", 10), ("nopredictions", 0)]);
    let ranking = live_ranking(&totals, &HashMap::new());

    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[1].userid, "nopredictions");
    assert_eq!(ranking[1].points, 0);
}

#[test]
fn empty_user_set_yields_empty_ranking() {
    let ranking = live_ranking(&[], &HashMap::new());
    assert!(ranking.is_empty());
}
