use std::collections::HashSet;

use diesel::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dggcrm::db::{self, AnyConnection};
use dggcrm::models::{
    NewAssignedTag, NewPerson, NewTag, NewVolunteerInGroup, Reach,
};
use dggcrm::schema::{
    assigned_tags, event_participants, events, general_role, groups, people,
    reaches, tags, volunteer_in_groups, volunteer_responses,
};
use dggcrm::seed::{self, REAL_TAGS, REACH_TYPES, SeedOpts};
use dggcrm::serializers;

fn test_conn() -> AnyConnection {
    let mut conn = db::get_db_conn("sqlite:/:memory:")
        .expect("failed to open in-memory database");
    db::run_migrations(&mut conn).expect("failed to run migrations");
    conn
}

#[test]
fn fixed_tags_inserted_exactly_once() {
    let mut conn = test_conn();

    seed::seed_tags(&mut conn).unwrap();
    // re-running the phase must not duplicate anything
    let tids = seed::seed_tags(&mut conn).unwrap();
    assert_eq!(tids.len(), 4);

    let mut names: Vec<String> =
        tags::table.select(tags::name).load(&mut conn).unwrap();
    names.sort();
    let mut expected: Vec<String> =
        REAL_TAGS.iter().map(|t| t.to_string()).collect();
    expected.sort();
    assert_eq!(names, expected);
}

#[test]
fn reseeding_the_same_people_is_idempotent() {
    let mut conn = test_conn();

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let first = seed::seed_people(&mut conn, &mut rng, 25).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let second = seed::seed_people(&mut conn, &mut rng, 25).unwrap();

    assert_eq!(first, second);
    let count: i64 = people::table.count().get_result(&mut conn).unwrap();
    assert_eq!(count, 25);
}

#[test]
fn small_population_matches_requested_counts_with_no_orphans() {
    let mut conn = test_conn();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let opts = SeedOpts {
        num_people: 10,
        num_groups: 2,
        num_events: 3,
        num_reaches: 1,
    };
    seed::populate(&mut conn, &mut rng, &opts).unwrap();

    let dids: HashSet<String> = people::table
        .select(people::did)
        .load::<String>(&mut conn)
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(dids.len(), 10);

    let gids: HashSet<i32> = groups::table
        .select(groups::gid)
        .load::<i32>(&mut conn)
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(gids.len(), 2);

    let eids: HashSet<i32> = events::table
        .select(events::eid)
        .load::<i32>(&mut conn)
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(eids.len(), 3);

    let rids: HashSet<i32> = reaches::table
        .select(reaches::rid)
        .load::<i32>(&mut conn)
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(rids.len(), 1);

    let tids: HashSet<i32> = tags::table
        .select(tags::tid)
        .load::<i32>(&mut conn)
        .unwrap()
        .into_iter()
        .collect();

    for gid in events::table
        .select(events::group_id)
        .load::<i32>(&mut conn)
        .unwrap()
    {
        assert!(gids.contains(&gid));
    }

    for (did, gid) in volunteer_in_groups::table
        .select((volunteer_in_groups::did, volunteer_in_groups::gid))
        .load::<(String, i32)>(&mut conn)
        .unwrap()
    {
        assert!(dids.contains(&did));
        assert!(gids.contains(&gid));
    }

    for (eid, did) in event_participants::table
        .select((event_participants::eid, event_participants::did))
        .load::<(i32, String)>(&mut conn)
        .unwrap()
    {
        assert!(eids.contains(&eid));
        assert!(dids.contains(&did));
    }

    for (did, tid) in assigned_tags::table
        .select((assigned_tags::did, assigned_tags::tid))
        .load::<(String, i32)>(&mut conn)
        .unwrap()
    {
        assert!(dids.contains(&did));
        assert!(tids.contains(&tid));
    }

    for (rid, did) in volunteer_responses::table
        .select((volunteer_responses::rid, volunteer_responses::did))
        .load::<(i32, String)>(&mut conn)
        .unwrap()
    {
        assert!(rids.contains(&rid));
        assert!(dids.contains(&did));
    }

    for assigned in reaches::table
        .select(reaches::assigned)
        .load::<Option<String>>(&mut conn)
        .unwrap()
        .into_iter()
        .flatten()
    {
        assert!(dids.contains(&assigned));
    }

    // exactly one role row per person
    let role_dids: Vec<String> = general_role::table
        .select(general_role::did)
        .load(&mut conn)
        .unwrap();
    assert_eq!(role_dids.len(), 10);
    assert_eq!(role_dids.iter().collect::<HashSet<_>>().len(), 10);
}

#[test]
fn default_population_has_unique_join_rows_and_valid_codes() {
    let mut conn = test_conn();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    seed::populate(&mut conn, &mut rng, &SeedOpts::default()).unwrap();

    let memberships: Vec<(String, i32, i32)> = volunteer_in_groups::table
        .select((
            volunteer_in_groups::did,
            volunteer_in_groups::gid,
            volunteer_in_groups::access_level,
        ))
        .load(&mut conn)
        .unwrap();
    let pairs: HashSet<(String, i32)> = memberships
        .iter()
        .map(|(did, gid, _)| (did.clone(), *gid))
        .collect();
    assert_eq!(pairs.len(), memberships.len());
    for (_, _, level) in &memberships {
        assert!((0..=1).contains(level));
    }

    let participants: Vec<(i32, String)> = event_participants::table
        .select((event_participants::eid, event_participants::did))
        .load(&mut conn)
        .unwrap();
    assert_eq!(
        participants.iter().collect::<HashSet<_>>().len(),
        participants.len()
    );

    let assignments: Vec<(String, i32)> = assigned_tags::table
        .select((assigned_tags::did, assigned_tags::tid))
        .load(&mut conn)
        .unwrap();
    assert_eq!(
        assignments.iter().collect::<HashSet<_>>().len(),
        assignments.len()
    );

    let responses: Vec<(i32, String, i32)> = volunteer_responses::table
        .select((
            volunteer_responses::rid,
            volunteer_responses::did,
            volunteer_responses::response,
        ))
        .load(&mut conn)
        .unwrap();
    let response_keys: HashSet<(i32, String)> = responses
        .iter()
        .map(|(rid, did, _)| (*rid, did.clone()))
        .collect();
    assert_eq!(response_keys.len(), responses.len());
    for (_, _, code) in &responses {
        assert!((0..=1).contains(code));
    }

    let reach_rows: Vec<(i32, String, i32)> = reaches::table
        .select((reaches::status, reaches::type_, reaches::priority))
        .load(&mut conn)
        .unwrap();
    for (status, kind, priority) in &reach_rows {
        assert!((0..=3).contains(status));
        assert!(REACH_TYPES.contains(&kind.as_str()));
        assert!((1..=5).contains(priority));
    }
}

#[test]
fn general_role_levels_follow_the_weighting() {
    let mut conn = test_conn();
    let mut rng = ChaCha8Rng::seed_from_u64(13);

    let dids = seed::seed_people(&mut conn, &mut rng, 2000).unwrap();
    seed::seed_general_roles(&mut conn, &mut rng, &dids).unwrap();

    let levels: Vec<i32> = general_role::table
        .select(general_role::access_level)
        .load(&mut conn)
        .unwrap();
    assert_eq!(levels.len(), 2000);

    let share = |level: i32| {
        levels.iter().filter(|&&l| l == level).count() as f64
            / levels.len() as f64
    };
    assert!((0.07..=0.13).contains(&share(0)));
    assert!((0.76..=0.84).contains(&share(1)));
    assert!((0.07..=0.13).contains(&share(2)));
}

#[test]
fn person_with_relations_reports_groups_and_tags() {
    let mut conn = test_conn();

    diesel::insert_into(people::table)
        .values(NewPerson {
            did: "123456789012345678".to_string(),
            name: "Rosa Calloway".to_string(),
            email: "rosa.calloway@example.org".to_string(),
            phone: "(555) 201-4433".to_string(),
        })
        .execute(&mut conn)
        .unwrap();

    diesel::insert_into(groups::table)
        .values(groups::name.eq("Ironwood Collective"))
        .execute(&mut conn)
        .unwrap();
    diesel::insert_into(groups::table)
        .values(groups::name.eq("Bluepeak Works"))
        .execute(&mut conn)
        .unwrap();
    let gids: Vec<i32> = groups::table
        .select(groups::gid)
        .order(groups::gid.asc())
        .load(&mut conn)
        .unwrap();

    for (i, &gid) in gids.iter().enumerate() {
        diesel::insert_into(volunteer_in_groups::table)
            .values(NewVolunteerInGroup {
                did: "123456789012345678".to_string(),
                gid,
                access_level: i as i32,
            })
            .execute(&mut conn)
            .unwrap();
    }

    diesel::insert_into(tags::table)
        .values(NewTag {
            name: "Dev-Art".to_string(),
        })
        .execute(&mut conn)
        .unwrap();
    let tid: i32 =
        tags::table.select(tags::tid).first(&mut conn).unwrap();
    diesel::insert_into(assigned_tags::table)
        .values(NewAssignedTag {
            did: "123456789012345678".to_string(),
            tid,
        })
        .execute(&mut conn)
        .unwrap();

    let repr =
        serializers::person_with_relations(&mut conn, "123456789012345678")
            .unwrap();

    assert_eq!(repr.groups.len(), 2);
    let mut levels: Vec<i32> =
        repr.groups.iter().map(|g| g.access_level).collect();
    levels.sort();
    assert_eq!(levels, vec![0, 1]);

    assert_eq!(repr.tags.len(), 1);
    assert_eq!(repr.tags[0].name, "Dev-Art");

    // person columns are flattened into the top level
    let value = serde_json::to_value(&repr).unwrap();
    assert_eq!(value["did"], "123456789012345678");
    assert_eq!(value["name"], "Rosa Calloway");
    assert_eq!(value["email"], "rosa.calloway@example.org");
    assert_eq!(value["phone"], "(555) 201-4433");
    assert!(value.get("person").is_none());
    assert_eq!(value["groups"].as_array().unwrap().len(), 2);
    assert_eq!(value["tags"][0]["tid"], tid);
}

#[test]
fn reach_rows_serialize_the_type_column() {
    let mut conn = test_conn();
    let mut rng = ChaCha8Rng::seed_from_u64(17);

    let dids = seed::seed_people(&mut conn, &mut rng, 3).unwrap();
    seed::seed_reaches(&mut conn, &mut rng, &dids, 1).unwrap();

    let reach: Reach = reaches::table.first(&mut conn).unwrap();
    let value = serde_json::to_value(&reach).unwrap();
    assert!(value.get("type").is_some());
    assert!(value.get("kind").is_none());
    assert_eq!(value["rid"], reach.rid);
}

#[test]
fn missing_person_surfaces_as_not_found() {
    let mut conn = test_conn();
    assert_eq!(
        serializers::person_with_relations(&mut conn, "000000000000000000")
            .unwrap_err(),
        diesel::result::Error::NotFound
    );
}
