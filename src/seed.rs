//! Populates a database with randomized test records.
//!
//! Phases run in a fixed order, each inside its own transaction, so a failure
//! partway through leaves the earlier phases durably committed. Inserts that
//! could collide with existing rows (people, join tables, the fixed tags)
//! check for the key first and skip the insert when it is already present;
//! group, event and reach creation has no such guard and a duplicate there is
//! a hard error.

use diesel::prelude::*;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::info;

use crate::db::AnyConnection;
use crate::fake;
use crate::models::{
    NewAssignedTag, NewEvent, NewEventParticipant, NewGeneralRole, NewGroup,
    NewPerson, NewReach, NewTag, NewVolunteerInGroup, NewVolunteerResponse,
};
use crate::schema::{
    assigned_tags, event_participants, events, general_role, groups, people,
    reaches, tags, volunteer_in_groups, volunteer_responses,
};

/// The only non-random records: every database starts from these four tags.
pub const REAL_TAGS: [&str; 4] =
    ["Dev-Software", "Dev-Art", "Community Building", "Attendence"];

pub const REACH_TYPES: [&str; 3] = ["asset", "sof_dev", "ally-reach"];

#[derive(Clone, Debug)]
pub struct SeedOpts {
    pub num_people: usize,
    pub num_groups: usize,
    pub num_events: usize,
    pub num_reaches: usize,
}

impl Default for SeedOpts {
    fn default() -> Self {
        Self {
            num_people: 50,
            num_groups: 5,
            num_events: 15,
            num_reaches: 20,
        }
    }
}

/// Runs every seed phase in order. Not atomic as a whole: each phase commits
/// on its own.
pub fn populate<R: Rng>(
    conn: &mut AnyConnection,
    rng: &mut R,
    opts: &SeedOpts,
) -> QueryResult<()> {
    let tids = seed_tags(conn)?;
    let dids = seed_people(conn, rng, opts.num_people)?;
    let gids = seed_groups(conn, rng, opts.num_groups)?;
    seed_memberships(conn, rng, &dids, &gids)?;
    seed_general_roles(conn, rng, &dids)?;
    let eids = seed_events(conn, rng, &gids, opts.num_events)?;
    seed_participants(conn, rng, &eids, &dids)?;
    seed_tag_assignments(conn, rng, &dids, &tids)?;
    let rids = seed_reaches(conn, rng, &dids, opts.num_reaches)?;
    seed_responses(conn, rng, &rids, &dids)?;

    info!(
        people = dids.len(),
        groups = gids.len(),
        events = eids.len(),
        reaches = rids.len(),
        "database populated"
    );
    Ok(())
}

/// Inserts the fixed tags, skipping any that already exist, and returns all
/// tag ids.
pub fn seed_tags(conn: &mut AnyConnection) -> QueryResult<Vec<i32>> {
    conn.transaction(|conn| {
        for name in REAL_TAGS {
            let present: i64 = tags::table
                .filter(tags::name.eq(name))
                .count()
                .get_result(conn)?;
            if present == 0 {
                diesel::insert_into(tags::table)
                    .values(NewTag {
                        name: name.to_string(),
                    })
                    .execute(conn)?;
            }
        }
        tags::table.select(tags::tid).load(conn)
    })
}

/// Generates `num_people` synthetic identities. A did that is already taken
/// is kept in the returned list but not inserted again.
pub fn seed_people<R: Rng>(
    conn: &mut AnyConnection,
    rng: &mut R,
    num_people: usize,
) -> QueryResult<Vec<String>> {
    conn.transaction(|conn| {
        let mut dids = Vec::with_capacity(num_people);
        for _ in 0..num_people {
            let person = NewPerson {
                did: fake::discord_id(rng),
                name: fake::name(rng),
                email: fake::email(rng),
                phone: fake::phone_number(rng),
            };
            let taken: i64 = people::table
                .filter(people::did.eq(&person.did))
                .count()
                .get_result(conn)?;
            if taken == 0 {
                diesel::insert_into(people::table)
                    .values(&person)
                    .execute(conn)?;
            }
            dids.push(person.did);
        }
        Ok(dids)
    })
}

/// Creates `num_groups` groups with company-style names and returns their
/// newly assigned ids.
pub fn seed_groups<R: Rng>(
    conn: &mut AnyConnection,
    rng: &mut R,
    num_groups: usize,
) -> QueryResult<Vec<i32>> {
    conn.transaction(|conn| {
        let mut gids = Vec::with_capacity(num_groups);
        for _ in 0..num_groups {
            diesel::insert_into(groups::table)
                .values(NewGroup {
                    name: fake::company(rng),
                })
                .execute(conn)?;
            // the row just inserted carries the highest serial id; nothing
            // else writes through this connection
            let gid: i32 = groups::table
                .select(groups::gid)
                .order(groups::gid.desc())
                .first(conn)?;
            gids.push(gid);
        }
        Ok(gids)
    })
}

/// Each person joins 0-3 random groups (capped by how many exist), with a
/// random access level.
pub fn seed_memberships<R: Rng>(
    conn: &mut AnyConnection,
    rng: &mut R,
    dids: &[String],
    gids: &[i32],
) -> QueryResult<()> {
    conn.transaction(|conn| {
        for did in dids {
            let joins = rng.random_range(0..=gids.len().min(3));
            for &gid in gids.choose_multiple(rng, joins) {
                let present: i64 = volunteer_in_groups::table
                    .filter(volunteer_in_groups::did.eq(did))
                    .filter(volunteer_in_groups::gid.eq(gid))
                    .count()
                    .get_result(conn)?;
                if present == 0 {
                    diesel::insert_into(volunteer_in_groups::table)
                        .values(NewVolunteerInGroup {
                            did: did.clone(),
                            gid,
                            access_level: rng.random_range(0..=1),
                        })
                        .execute(conn)?;
                }
            }
        }
        Ok(())
    })
}

/// One general role row per person: 0 = needs approval, 1 = organizer,
/// 2 = admin, weighted 10/80/10.
pub fn seed_general_roles<R: Rng>(
    conn: &mut AnyConnection,
    rng: &mut R,
    dids: &[String],
) -> QueryResult<()> {
    conn.transaction(|conn| {
        for did in dids {
            let access_level = match rng.random_range(0..10) {
                0 => 0,
                9 => 2,
                _ => 1,
            };
            diesel::insert_into(general_role::table)
                .values(NewGeneralRole {
                    did: did.clone(),
                    access_level,
                })
                .execute(conn)?;
        }
        Ok(())
    })
}

/// Creates `num_events`, each owned by a random existing group, and returns
/// their newly assigned ids. Without any groups there is nothing to attach
/// events to, so none are created.
pub fn seed_events<R: Rng>(
    conn: &mut AnyConnection,
    rng: &mut R,
    gids: &[i32],
    num_events: usize,
) -> QueryResult<Vec<i32>> {
    if gids.is_empty() {
        return Ok(Vec::new());
    }
    conn.transaction(|conn| {
        let mut eids = Vec::with_capacity(num_events);
        for _ in 0..num_events {
            diesel::insert_into(events::table)
                .values(NewEvent {
                    name: fake::catch_phrase(rng),
                    description: fake::text(rng, 200),
                    date: fake::date_time_within_year(rng),
                    location: fake::address(rng),
                    group_id: *gids.choose(rng).unwrap(),
                })
                .execute(conn)?;
            let eid: i32 = events::table
                .select(events::eid)
                .order(events::eid.desc())
                .first(conn)?;
            eids.push(eid);
        }
        Ok(eids)
    })
}

/// Each event gets 5-20 random participants; the lower bound shrinks when
/// fewer than five people exist.
pub fn seed_participants<R: Rng>(
    conn: &mut AnyConnection,
    rng: &mut R,
    eids: &[i32],
    dids: &[String],
) -> QueryResult<()> {
    conn.transaction(|conn| {
        for &eid in eids {
            let cap = dids.len().min(20);
            let count = rng.random_range(cap.min(5)..=cap);
            for did in dids.choose_multiple(rng, count) {
                let present: i64 = event_participants::table
                    .filter(event_participants::eid.eq(eid))
                    .filter(event_participants::did.eq(did))
                    .count()
                    .get_result(conn)?;
                if present == 0 {
                    diesel::insert_into(event_participants::table)
                        .values(NewEventParticipant {
                            eid,
                            did: did.clone(),
                        })
                        .execute(conn)?;
                }
            }
        }
        Ok(())
    })
}

/// Each person gets up to two random tags.
pub fn seed_tag_assignments<R: Rng>(
    conn: &mut AnyConnection,
    rng: &mut R,
    dids: &[String],
    tids: &[i32],
) -> QueryResult<()> {
    conn.transaction(|conn| {
        for did in dids {
            let count = rng.random_range(0..=tids.len().min(2));
            for &tid in tids.choose_multiple(rng, count) {
                let present: i64 = assigned_tags::table
                    .filter(assigned_tags::did.eq(did))
                    .filter(assigned_tags::tid.eq(tid))
                    .count()
                    .get_result(conn)?;
                if present == 0 {
                    diesel::insert_into(assigned_tags::table)
                        .values(NewAssignedTag {
                            did: did.clone(),
                            tid,
                        })
                        .execute(conn)?;
                }
            }
        }
        Ok(())
    })
}

/// Creates `num_reaches` outreach requests and returns their newly assigned
/// ids. The assignee is drawn uniformly from all people plus "unassigned".
pub fn seed_reaches<R: Rng>(
    conn: &mut AnyConnection,
    rng: &mut R,
    dids: &[String],
    num_reaches: usize,
) -> QueryResult<Vec<i32>> {
    conn.transaction(|conn| {
        let mut rids = Vec::with_capacity(num_reaches);
        for _ in 0..num_reaches {
            // index == dids.len() means no assignee
            let pick = rng.random_range(0..=dids.len());
            diesel::insert_into(reaches::table)
                .values(NewReach {
                    status: rng.random_range(0..=3),
                    assigned: dids.get(pick).cloned(),
                    title: fake::sentence(rng, 6),
                    description: fake::text(rng, 300),
                    kind: REACH_TYPES.choose(rng).unwrap().to_string(),
                    priority: rng.random_range(1..=5),
                })
                .execute(conn)?;
            let rid: i32 = reaches::table
                .select(reaches::rid)
                .order(reaches::rid.desc())
                .first(conn)?;
            rids.push(rid);
        }
        Ok(rids)
    })
}

/// Each reach gets 0-10 volunteer responses with a random accepted/rejected
/// code.
pub fn seed_responses<R: Rng>(
    conn: &mut AnyConnection,
    rng: &mut R,
    rids: &[i32],
    dids: &[String],
) -> QueryResult<()> {
    conn.transaction(|conn| {
        for &rid in rids {
            let count = rng.random_range(0..=dids.len().min(10));
            for did in dids.choose_multiple(rng, count) {
                let present: i64 = volunteer_responses::table
                    .filter(volunteer_responses::rid.eq(rid))
                    .filter(volunteer_responses::did.eq(did))
                    .count()
                    .get_result(conn)?;
                if present == 0 {
                    diesel::insert_into(volunteer_responses::table)
                        .values(NewVolunteerResponse {
                            rid,
                            did: did.clone(),
                            response: rng.random_range(0..=1),
                        })
                        .execute(conn)?;
                }
            }
        }
        Ok(())
    })
}
