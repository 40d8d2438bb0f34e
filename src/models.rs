//! Row structs for every table plus the `New*` insertables used by the seed
//! tool and tests.
//!
//! The wire representation of each entity is the row itself: all structs
//! derive `Serialize` with a one-to-one column mapping. Composite shapes with
//! derived collections live in [`crate::serializers`].

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;

use crate::schema::{
    assigned_tags, event_participants, events, general_role, groups, people,
    reaches, tags, volunteer_in_groups, volunteer_responses,
};

#[derive(Queryable, Serialize, Clone, PartialEq, Debug)]
pub struct Person {
    pub did: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = people)]
pub struct NewPerson {
    pub did: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Queryable, Serialize, Clone, PartialEq, Debug)]
pub struct Group {
    pub gid: i32,
    pub name: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = groups)]
pub struct NewGroup {
    pub name: String,
}

/// Membership of a person in a group. `access_level` is 0 (view) or 1 (edit).
#[derive(Queryable, Serialize, Clone, PartialEq, Debug)]
pub struct VolunteerInGroup {
    pub did: String,
    pub gid: i32,
    pub access_level: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = volunteer_in_groups)]
pub struct NewVolunteerInGroup {
    pub did: String,
    pub gid: i32,
    pub access_level: i32,
}

/// Site-wide role of a person: 0 = needs approval, 1 = organizer, 2 = admin.
#[derive(Queryable, Serialize, Clone, PartialEq, Debug)]
pub struct GeneralRole {
    pub did: String,
    pub access_level: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = general_role)]
pub struct NewGeneralRole {
    pub did: String,
    pub access_level: i32,
}

#[derive(Queryable, Serialize, Clone, PartialEq, Debug)]
pub struct Event {
    pub eid: i32,
    pub name: String,
    pub description: String,
    pub date: NaiveDateTime,
    pub location: String,
    pub group_id: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = events)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub date: NaiveDateTime,
    pub location: String,
    pub group_id: i32,
}

#[derive(Queryable, Serialize, Clone, PartialEq, Debug)]
pub struct EventParticipant {
    pub eid: i32,
    pub did: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = event_participants)]
pub struct NewEventParticipant {
    pub eid: i32,
    pub did: String,
}

#[derive(Queryable, Serialize, Clone, PartialEq, Debug)]
pub struct Tag {
    pub tid: i32,
    pub name: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = tags)]
pub struct NewTag {
    pub name: String,
}

#[derive(Queryable, Serialize, Clone, PartialEq, Debug)]
pub struct AssignedTag {
    pub did: String,
    pub tid: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = assigned_tags)]
pub struct NewAssignedTag {
    pub did: String,
    pub tid: i32,
}

/// An outreach request. `status` runs 0-3, `priority` 1 (highest) to 5
/// (lowest); `assigned` is the did of the responsible person, if any.
#[derive(Queryable, Serialize, Clone, PartialEq, Debug)]
pub struct Reach {
    pub rid: i32,
    pub status: i32,
    pub assigned: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = reaches)]
pub struct NewReach {
    pub status: i32,
    pub assigned: Option<String>,
    pub title: String,
    pub description: String,
    #[diesel(column_name = type_)]
    pub kind: String,
    pub priority: i32,
}

/// A volunteer's answer to a reach: 0 = accepted, 1 = rejected.
#[derive(Queryable, Serialize, Clone, PartialEq, Debug)]
pub struct VolunteerResponse {
    pub rid: i32,
    pub did: String,
    pub response: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = volunteer_responses)]
pub struct NewVolunteerResponse {
    pub rid: i32,
    pub did: String,
    pub response: i32,
}
