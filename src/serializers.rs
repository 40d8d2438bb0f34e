//! Composite wire shapes that need more than one query to assemble.
//!
//! Plain entities serialize straight from their row structs in
//! [`crate::models`]. The only augmented shape is the person view, which adds
//! the groups the person belongs to (with their access level in each) and the
//! tags assigned to them. Both collections come back in query order; no sort
//! is defined.

use diesel::prelude::*;
use serde::Serialize;

use crate::db::AnyConnection;
use crate::models::Person;
use crate::schema::{assigned_tags, groups, people, tags, volunteer_in_groups};

#[derive(Queryable, Serialize, Clone, PartialEq, Debug)]
pub struct GroupWithAccess {
    pub gid: i32,
    pub name: String,
    pub access_level: i32,
}

#[derive(Queryable, Serialize, Clone, PartialEq, Debug)]
pub struct TagRef {
    pub tid: i32,
    pub name: String,
}

/// Serializes as `{did, name, email, phone, groups: [...], tags: [...]}`.
#[derive(Serialize, Debug)]
pub struct PersonWithRelations {
    #[serde(flatten)]
    pub person: Person,
    pub groups: Vec<GroupWithAccess>,
    pub tags: Vec<TagRef>,
}

/// Fetches a person together with their group memberships and tags.
///
/// A missing person surfaces as `diesel::result::Error::NotFound`, to be
/// mapped by the caller.
pub fn person_with_relations(
    conn: &mut AnyConnection,
    did: &str,
) -> QueryResult<PersonWithRelations> {
    let person = people::table.find(did).first::<Person>(conn)?;

    let group_rows = volunteer_in_groups::table
        .inner_join(groups::table)
        .filter(volunteer_in_groups::did.eq(did))
        .select((groups::gid, groups::name, volunteer_in_groups::access_level))
        .load::<GroupWithAccess>(conn)?;

    let tag_rows = assigned_tags::table
        .inner_join(tags::table)
        .filter(assigned_tags::did.eq(did))
        .select((tags::tid, tags::name))
        .load::<TagRef>(conn)?;

    Ok(PersonWithRelations {
        person,
        groups: group_rows,
        tags: tag_rows,
    })
}
