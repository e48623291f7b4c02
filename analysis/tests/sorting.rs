use analysis::sorting::{self, Direction, SortConfig, SortKey};
use common::{ClassCounts, DemoData, Header, PlayerSummaries, PlayerSummary, Team, User};
use pretty_assertions::assert_eq;

fn load_fixture() -> DemoData {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../testfiles/koth_viaduct.json");
    let input_bytes = std::fs::read(path).unwrap();
    analysis::parser::from_json(&input_bytes).unwrap()
}

fn demo(users: Vec<(u32, &str, Team, Option<PlayerSummary>)>) -> DemoData {
    let summaries = users
        .iter()
        .filter_map(|(id, _, _, s)| s.clone().map(|s| (*id, s)))
        .collect();

    DemoData {
        header: Header {
            demo_type: "HL2DEMO".to_owned(),
            version: 3,
            protocol: 24,
            server: "test".to_owned(),
            nick: "test".to_owned(),
            map: "cp_process_final".to_owned(),
            game: "tf".to_owned(),
            duration: 0.0,
            ticks: 0,
            frames: 0,
            signon: 0,
        },
        chat: Vec::new(),
        users: users
            .into_iter()
            .map(|(id, name, team, _)| {
                (
                    id,
                    User {
                        name: name.to_owned(),
                        user_id: id,
                        steam_id: format!("[U:1:{}]", id),
                        team,
                        classes: ClassCounts::default(),
                    },
                )
            })
            .collect(),
        deaths: Vec::new(),
        rounds: Vec::new(),
        start_tick: 0,
        interval_per_tick: None,
        player_summary: Some(PlayerSummaries {
            player_summaries: summaries,
        }),
    }
}

fn points(points: u32) -> Option<PlayerSummary> {
    Some(PlayerSummary {
        points: Some(points),
        ..Default::default()
    })
}

fn ids(users: &[&User]) -> Vec<u32> {
    users.iter().map(|u| u.user_id).collect()
}

#[test]
fn points_descending() {
    let data = load_fixture();
    let users = sorting::all_users(&data);

    let sorted = sorting::sort_users(&users, &data, SortConfig::default());

    assert_eq!(vec![2, 3, 4, 5, 7], ids(&sorted));
}

#[test]
fn points_ascending() {
    let data = load_fixture();
    let users = sorting::all_users(&data);

    let sorted = sorting::sort_users(&users, &data, SortConfig::new(SortKey::Points, Direction::Ascending));

    assert_eq!(vec![5, 7, 4, 2, 3], ids(&sorted));
}

#[test]
fn missing_summary_counts_as_zero() {
    let data = load_fixture();
    let users = sorting::all_users(&data);

    let sorted = sorting::sort_users(&users, &data, SortConfig::new(SortKey::Healing, Direction::Descending));
    assert_eq!(vec![4, 2, 3, 5, 7], ids(&sorted));

    let sorted = sorting::sort_users(&users, &data, SortConfig::new(SortKey::Healing, Direction::Ascending));
    assert_eq!(vec![2, 3, 5, 7, 4], ids(&sorted));
}

#[test]
fn name_is_case_insensitive() {
    let data = load_fixture();
    let users = sorting::all_users(&data);

    let sorted = sorting::sort_users(&users, &data, SortConfig::new(SortKey::Name, Direction::Ascending));

    let names: Vec<_> = sorted.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(vec!["alice", "Bob", "carol", "dave", "SourceTV"], names);
}

#[test]
fn kd_and_headshots() {
    let data = load_fixture();
    let users = sorting::all_users(&data);

    let sorted = sorting::sort_users(&users, &data, SortConfig::new(SortKey::Kd, Direction::Descending));
    assert_eq!(vec![2, 3, 4, 5, 7], ids(&sorted));

    let sorted = sorting::sort_users(&users, &data, SortConfig::new(SortKey::HeadshotPct, Direction::Ascending));
    assert_eq!(vec![3, 4, 5, 7, 2], ids(&sorted));
}

#[test]
fn permutation_and_idempotent() {
    let data = load_fixture();
    let users = sorting::all_users(&data);

    let keys = [
        SortKey::Name,
        SortKey::Points,
        SortKey::Kills,
        SortKey::Assists,
        SortKey::Deaths,
        SortKey::Kd,
        SortKey::HeadshotPct,
        SortKey::DamageDealt,
        SortKey::Healing,
        SortKey::Ubercharges,
        SortKey::Backstabs,
        SortKey::BuildingsDestroyed,
        SortKey::Captures,
        SortKey::Defenses,
        SortKey::Support,
    ];

    for key in keys {
        for direction in [Direction::Ascending, Direction::Descending] {
            let config = SortConfig::new(key, direction);
            let sorted = sorting::sort_users(&users, &data, config);

            let mut sorted_ids = ids(&sorted);
            assert_eq!(users.len(), sorted_ids.len());

            let again = sorting::sort_users(&sorted, &data, config);
            assert_eq!(sorted_ids, ids(&again), "{:?}", config);

            sorted_ids.sort_unstable();
            assert_eq!(ids(&users), sorted_ids);
        }
    }
}

#[test]
fn reversed_direction() {
    let data = demo(vec![
        (1, "a", Team::Red, points(5)),
        (2, "b", Team::Red, points(20)),
        (3, "c", Team::Blue, points(1)),
        (4, "d", Team::Blue, points(9)),
    ]);
    let users = sorting::all_users(&data);

    let desc = sorting::sort_users(&users, &data, SortConfig::new(SortKey::Points, Direction::Descending));
    let asc = sorting::sort_users(&users, &data, SortConfig::new(SortKey::Points, Direction::Ascending));

    let mut reversed = ids(&asc);
    reversed.reverse();
    assert_eq!(ids(&desc), reversed);
}

#[test]
fn ties_keep_input_order() {
    let data = demo(vec![
        (9, "x", Team::Red, points(10)),
        (4, "y", Team::Red, points(10)),
        (6, "z", Team::Red, points(10)),
    ]);
    let users: Vec<&User> = vec![&data.users[&9], &data.users[&6], &data.users[&4]];

    for direction in [Direction::Ascending, Direction::Descending] {
        let sorted = sorting::sort_users(&users, &data, SortConfig::new(SortKey::Points, direction));
        assert_eq!(vec![9, 6, 4], ids(&sorted));
    }
}

#[test]
fn all_tied_keeps_reverse_id_order() {
    let data = load_fixture();
    let mut users = sorting::all_users(&data);
    users.reverse();

    let sorted = sorting::sort_users(&users, &data, SortConfig::new(SortKey::Backstabs, Direction::Descending));

    assert_eq!(vec![7, 5, 4, 3, 2], ids(&sorted));
}

#[test]
fn resort_by_second_key() {
    let data = demo(vec![
        (1, "d", Team::Red, points(10)),
        (2, "a", Team::Red, points(5)),
        (3, "c", Team::Blue, points(10)),
        (4, "b", Team::Blue, points(5)),
    ]);
    let users = sorting::all_users(&data);

    let by_name = sorting::sort_users(&users, &data, SortConfig::new(SortKey::Name, Direction::Ascending));
    assert_eq!(vec![2, 4, 3, 1], ids(&by_name));

    let by_points = sorting::sort_users(&by_name, &data, SortConfig::new(SortKey::Points, Direction::Descending));
    assert_eq!(vec![3, 1, 2, 4], ids(&by_points));
}

#[test]
fn grouped_by_team() {
    let data = demo(vec![
        (1, "spec", Team::Other, None),
        (2, "blue low", Team::Blue, points(3)),
        (3, "red low", Team::Red, points(2)),
        (4, "blue high", Team::Blue, points(40)),
        (5, "red high", Team::Red, points(18)),
        (6, "blue none", Team::Blue, None),
    ]);
    let users = sorting::all_users(&data);

    let grouped = sorting::group_by_team(&users, &data);

    assert_eq!(vec![5, 3, 4, 2, 6, 1], ids(&grouped));
}

#[test]
fn toggle() {
    let config = SortConfig::default();
    assert_eq!(SortConfig::new(SortKey::Points, Direction::Descending), config);

    let config = config.toggle(SortKey::Points);
    assert_eq!(Direction::Ascending, config.direction);

    let config = config.toggle(SortKey::Name);
    assert_eq!(SortConfig::new(SortKey::Name, Direction::Ascending), config);

    let config = config.toggle(SortKey::Kills);
    assert_eq!(SortConfig::new(SortKey::Kills, Direction::Descending), config);

    assert_eq!("↓", config.display_symbol(SortKey::Kills));
    assert_eq!("-", config.display_symbol(SortKey::Deaths));
}
