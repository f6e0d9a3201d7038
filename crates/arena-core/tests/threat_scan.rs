use arena_core::{
    ArenaDimensions, ArenaSnapshot, EngineConfig, Heading, PlayerId, PlayerState, Position,
    ThreatScanner, ThreatStatus,
};

fn snapshot(me: PlayerState, others: &[(&str, PlayerState)]) -> ArenaSnapshot {
    let roster = std::iter::once((PlayerId::from("me"), me))
        .chain(others.iter().map(|(id, state)| (PlayerId::from(*id), *state)));
    ArenaSnapshot::new(ArenaDimensions::new(12, 12), roster, PlayerId::from("me"))
        .expect("valid snapshot")
}

fn player(x: i32, y: i32, heading: Heading) -> PlayerState {
    PlayerState::new(Position::new(x, y), heading)
}

#[test]
fn scans_all_four_axes_independently() {
    let me = player(6, 6, Heading::North);
    let arena = snapshot(
        me,
        &[
            ("north", player(6, 3, Heading::South)),
            ("east", player(7, 6, Heading::East)),
            ("south", player(6, 8, Heading::West)),
        ],
    );

    let scan = ThreatScanner::default().scan(&arena);

    let north = scan.get(Heading::North);
    assert_eq!((north.status, north.distance), (ThreatStatus::WillBeHit, 3));
    let east = scan.get(Heading::East);
    assert_eq!((east.status, east.distance), (ThreatStatus::Blocked, 1));
    let south = scan.get(Heading::South);
    assert_eq!((south.status, south.distance), (ThreatStatus::Blocked, 2));
    let west = scan.get(Heading::West);
    assert_eq!((west.status, west.distance), (ThreatStatus::Empty, 3));
    assert_eq!(scan.threat_count(), 1);
}

#[test]
fn classification_is_fixed_by_first_occupant() {
    let me = player(6, 6, Heading::North);
    let near_only = snapshot(me, &[("near", player(6, 5, Heading::East))]);
    let with_far_threats = snapshot(
        me,
        &[
            ("near", player(6, 5, Heading::East)),
            ("mid", player(6, 4, Heading::South)),
            ("far", player(6, 3, Heading::South)),
        ],
    );

    let scanner = ThreatScanner::default();
    assert_eq!(
        scanner.scan(&near_only).get(Heading::North),
        scanner.scan(&with_far_threats).get(Heading::North)
    );
}

#[test]
fn shared_cell_reports_lowest_identifier() {
    let me = player(6, 6, Heading::North);
    let arena = snapshot(
        me,
        &[
            ("zulu", player(4, 6, Heading::East)),
            ("alpha", player(4, 6, Heading::North)),
        ],
    );

    let west = ThreatScanner::default().scan(&arena).get(Heading::West).clone();
    assert_eq!(west.status, ThreatStatus::Blocked);
    assert_eq!(west.contact.map(|c| c.id), Some(PlayerId::from("alpha")));
}

#[test]
fn players_outside_window_are_invisible() {
    let me = player(6, 6, Heading::North);
    let arena = snapshot(
        me,
        &[
            ("far_north", player(6, 2, Heading::South)),
            ("far_east", player(10, 6, Heading::West)),
            ("diagonal", player(7, 7, Heading::North)),
        ],
    );

    let scan = ThreatScanner::default().scan(&arena);
    assert!(scan.iter().all(|(_, r)| r.status == ThreatStatus::Empty));

    let wide = ThreatScanner::new(&EngineConfig::with_scan_range(4)).scan(&arena);
    assert_eq!(wide.threat_count(), 2);
}

#[test]
fn score_of_responsible_player_is_exposed() {
    let me = player(6, 6, Heading::North);
    let arena = snapshot(me, &[("rich", player(6, 5, Heading::West).with_score(42))]);

    let north = ThreatScanner::default().scan(&arena).get(Heading::North).clone();
    assert_eq!(north.contact_score(), Some(42));
    assert_eq!((north.status, north.distance), (ThreatStatus::Blocked, 1));
}
