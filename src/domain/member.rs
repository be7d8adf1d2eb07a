use serde::{Deserialize, Serialize};

use super::{DisplayName, ExecRole, ImageUpload};

// A roster member as reported by the backend. Exec vs non-exec is encoded
// by which array of the roster response the member arrives in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    #[serde(rename = "execRole", default)]
    pub exec_role: Option<String>,
    #[serde(rename = "headshotUrl", default)]
    pub headshot_url: String,
    #[serde(rename = "relativeOrder", default)]
    pub relative_order: Option<u32>,
}

// Members without an explicit ordering slot sort as if they held this one.
pub const DEFAULT_RELATIVE_ORDER: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRoster {
    #[serde(rename = "totalCount")]
    pub total_count: u32,
    pub exec: Vec<Member>,
    #[serde(rename = "nonExec")]
    pub non_exec: Vec<Member>,
}

impl MemberRoster {
    // The two-array classification is a shape-encoded contract; the count is
    // the one piece of it the client can cross-check.
    pub fn validate_total_count(&self) -> Result<(), String> {
        let actual = self.exec.len() + self.non_exec.len();
        if self.total_count as usize != actual {
            return Err(format!(
                "totalCount is {} but the response carries {} members",
                self.total_count, actual
            ));
        }
        Ok(())
    }

    // Executives sort by relative order; ties (and members without an order)
    // keep their input order.
    pub fn exec_ordered(&self) -> Vec<Member> {
        let mut members = self.exec.clone();
        members.sort_by_key(|m| {
            m.relative_order.unwrap_or(DEFAULT_RELATIVE_ORDER)
        });
        members
    }

    // Non-executives always sort by name, whatever their relative order says.
    pub fn non_exec_ordered(&self) -> Vec<Member> {
        let mut members = self.non_exec.clone();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        members
    }

    pub fn find(&self, id: i64) -> Option<&Member> {
        self.exec
            .iter()
            .chain(self.non_exec.iter())
            .find(|m| m.id == id)
    }
}

// Add form payload. Name and headshot are required; a member added without
// an exec role lands in the non-exec array on the next fetch.
#[derive(Debug)]
pub struct NewMember {
    pub name: DisplayName,
    pub exec_role: Option<ExecRole>,
    pub headshot: ImageUpload,
}

// Edit form payload. Omitting the headshot keeps the stored image.
#[derive(Debug)]
pub struct MemberUpdate {
    pub name: DisplayName,
    pub exec_role: Option<ExecRole>,
    pub headshot: Option<ImageUpload>,
}
