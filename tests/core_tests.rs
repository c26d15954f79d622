// tests/core_tests.rs
use scrimmage_analysis::PlayAnalyzer;
use scrimmage_analysis::classify::team_for;
use scrimmage_core::{AttackingDirection, CoverageLabel, Detection, DetectionSet, PlayError, Team};

/// Eleven a side, offense left of x = 605
fn symmetric_formation() -> DetectionSet {
    let offense = [
        ("C", 590.0, 300.0),
        ("OG", 590.0, 270.0),
        ("OG", 590.0, 330.0),
        ("OT", 590.0, 240.0),
        ("OT", 590.0, 360.0),
        ("TE", 590.0, 390.0),
        ("WR", 590.0, 100.0),
        ("WR", 590.0, 500.0),
        ("QB", 520.0, 300.0),
        ("RB", 450.0, 300.0),
        ("FB", 485.0, 300.0),
    ];
    let defense = [
        ("DE", 620.0, 230.0),
        ("DE", 620.0, 370.0),
        ("DT", 620.0, 280.0),
        ("DT", 620.0, 320.0),
        ("LB", 700.0, 250.0),
        ("LB", 700.0, 350.0),
        ("LB", 700.0, 300.0),
        ("CB", 620.0, 100.0),
        ("CB", 620.0, 500.0),
        ("S", 900.0, 200.0),
        ("S", 900.0, 400.0),
    ];

    offense
        .iter()
        .chain(defense.iter())
        .enumerate()
        .map(|(i, &(label, x, y))| Detection::new(format!("p{i}"), label, x, y).with_size(40.0, 80.0))
        .collect()
}

#[test]
fn test_symmetric_formation() {
    let result = PlayAnalyzer::default().analyze(&symmetric_formation()).unwrap();
    let play = &result.play;

    assert_eq!(play.metadata.line_of_scrimmage_pixel, 605.0);
    assert_eq!(play.metadata.attacking_direction, AttackingDirection::Right);
    assert_eq!(play.metadata.field_dimensions.pixels_per_yard, 40.0);
    assert_eq!(play.metadata.field_center_y_pixel, 300.0);

    assert_eq!(play.team_stats.offense_count, 11);
    assert_eq!(play.team_stats.defense_count, 11);
    assert!(play.team_stats.balanced);

    assert!(play.offense().all(|p| p.coordinates.x_yards < 0.0));
    assert!(play.defense().all(|p| p.coordinates.x_yards > 0.0));

    let qb = play.players.iter().find(|p| p.detection_id == "p8").unwrap();
    assert_eq!(qb.team, Team::Offense);
    assert_eq!(qb.coordinates.x_yards, -2.13);
    assert_eq!(qb.coordinates.y_yards, 0.0);
}

#[test]
fn test_symmetric_formation_coverage() {
    let result = PlayAnalyzer::default().analyze(&symmetric_formation()).unwrap();
    let analysis = &result.coverage_analysis.analysis;

    // Both corners press the outside receivers, both safeties sit deep
    assert_eq!(analysis.man_signals, 2);
    assert_eq!(analysis.zone_signals, 0);
    assert_eq!(analysis.deep_safeties, 2);
    assert_eq!(analysis.deep_corners, 0);
    assert_eq!(analysis.avg_lb_depth, 2.38);
    assert_eq!(result.coverage_analysis.coverage_call, CoverageLabel::Cover2Man);
}

#[test]
fn test_line_at_exactly_600() {
    // Pull the defense in 10 px so the gap is 590..610
    let detections: DetectionSet = symmetric_formation()
        .into_iter()
        .enumerate()
        .map(|(i, mut d)| {
            if i >= 11 {
                d.x -= 10.0;
            }
            d
        })
        .collect();

    let result = PlayAnalyzer::default().analyze(&detections).unwrap();
    let play = &result.play;

    assert_eq!(play.metadata.line_of_scrimmage_pixel, 600.0);
    assert_eq!(play.team_stats.offense_count, 11);
    assert_eq!(play.team_stats.defense_count, 11);
    assert!(play.team_stats.balanced);

    // Unlisted labels on the line itself belong to the defense
    let on_line = Detection::new("w1", "WING", 600.0, 300.0);
    let just_behind = Detection::new("w2", "WING", 599.99, 300.0);
    assert_eq!(team_for(&on_line, Some(600.0)), Team::Defense);
    assert_eq!(team_for(&just_behind, Some(600.0)), Team::Offense);
}

#[test]
fn test_identical_x_is_degenerate() {
    let detections: DetectionSet = ["QB", "RB", "WR", "CB", "S", "LB"]
        .iter()
        .enumerate()
        .map(|(i, label)| Detection::new(format!("p{i}"), *label, 500.0, 100.0 + i as f64 * 50.0))
        .collect();

    let err = PlayAnalyzer::default().analyze(&detections).unwrap_err();
    assert_eq!(err, PlayError::DegenerateScale { pixels_per_yard: 0.0 });
}

#[test]
fn test_bare_list_input() {
    let json = r#"[
        {"x": 450, "y": 300, "width": 40, "height": 80, "confidence": 0.9, "class": "RB", "detection_id": "rb"},
        {"x": 520, "y": 300, "width": 40, "height": 80, "confidence": 0.9, "class": "QB", "detection_id": "qb"},
        {"x": 590, "y": 300, "width": 40, "height": 80, "confidence": 0.9, "class": "C", "detection_id": "c"},
        {"x": 620, "y": 280, "width": 40, "height": 80, "confidence": 0.9, "class": "DT", "detection_id": "dt"},
        {"x": 700, "y": 300, "width": 40, "height": 80, "confidence": 0.9, "class": "LB", "detection_id": "lb"},
        {"x": 950, "y": 300, "width": 40, "height": 80, "confidence": 0.9, "class": "FS", "detection_id": "fs"},
        {"x": 800, "y": 600, "width": 40, "height": 80, "confidence": 0.8, "class": "referee", "detection_id": "r"}
    ]"#;

    let detections = DetectionSet::from_json_str(json).unwrap();
    let result = PlayAnalyzer::default().analyze(&detections).unwrap();

    assert_eq!(result.play.players.len(), 6);
    assert_eq!(result.play.metadata.detections.referees, 1);
    assert!(result.play.players.iter().all(|p| p.detection_id != "r"));
}
