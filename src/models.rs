//! Board Models
//!
//! Rows shown in the two tables and the move records kept for undo.

use serde::{Deserialize, Deserializer, Serialize};

/// Draggable row of the source (right) table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRow {
    pub id: String,
    pub item: String,
}

impl SourceRow {
    pub fn new(id: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item: item.into(),
        }
    }
}

/// Droppable row of the target (left) table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRow {
    pub id: u32,
    pub description: String,
    #[serde(default)]
    pub startdate: String,
    #[serde(default)]
    pub enddate: String,
    #[serde(default)]
    pub pred: String,
    /// Ids of the source rows dropped onto this row
    #[serde(default, deserialize_with = "association_list")]
    pub pid: Vec<String>,
    /// Labels of the source rows dropped onto this row, parallel to `pid`
    #[serde(default, deserialize_with = "association_list")]
    pub hint: Vec<String>,
}

impl TargetRow {
    pub fn new(id: u32, description: impl Into<String>, startdate: &str, enddate: &str, pred: &str) -> Self {
        Self {
            id,
            description: description.into(),
            startdate: startdate.to_string(),
            enddate: enddate.to_string(),
            pred: pred.to_string(),
            pid: Vec::new(),
            hint: Vec::new(),
        }
    }

    /// Record an association with `row`
    pub fn associate(&mut self, row: &SourceRow) {
        self.pid.push(row.id.clone());
        self.hint.push(row.item.clone());
    }

    /// Remove the most recent association with `row`
    pub fn dissociate(&mut self, row: &SourceRow) {
        if let Some(pos) = self.pid.iter().rposition(|id| *id == row.id) {
            self.pid.remove(pos);
        }
        if let Some(pos) = self.hint.iter().rposition(|item| *item == row.item) {
            self.hint.remove(pos);
        }
    }

    /// `pid` as shown in the ID cell
    pub fn pid_label(&self) -> String {
        self.pid.join(", ")
    }

    /// `hint` as shown in the ID cell tooltip
    pub fn hint_label(&self) -> String {
        self.hint.join(", ")
    }
}

/// Source row as carried in the drag payload, with its index at drag start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    #[serde(flatten)]
    pub row: SourceRow,
    #[serde(default)]
    pub number: usize,
}

/// One drop, kept so it can be undone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    #[serde(flatten)]
    pub row: SourceRow,
    /// Index the row had in the source list when it was dropped
    pub number: usize,
    pub target_id: u32,
}

/// Stored association fields were written either as a list or as a
/// comma-joined string depending on the revision that saved them.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredAssociation {
    List(Vec<String>),
    Joined(String),
}

fn association_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = Option::<StoredAssociation>::deserialize(deserializer)?;
    Ok(match stored {
        None => Vec::new(),
        Some(StoredAssociation::List(list)) => list,
        Some(StoredAssociation::Joined(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect(),
    })
}
