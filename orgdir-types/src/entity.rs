//! Directory entities and their creation inputs.
//!
//! Relations are expressed through ids. `Organization` is the hydrated view
//! returned by queries: it carries copies of its building, phones and
//! activities, but owns none of the shared rows.

use crate::ids::{ActivityId, BuildingId, OrganizationId, PhoneId};
use serde::{Deserialize, Serialize};

/// A node of the activity category tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub parent_id: Option<ActivityId>,
    /// Nesting level as recorded at creation (1 for roots). Informational only.
    pub level: u32,
}

impl Activity {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// An activity together with its (depth-bounded) subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityNode {
    pub activity: Activity,
    #[serde(default)]
    pub children: Vec<ActivityNode>,
}

impl ActivityNode {
    pub fn leaf(activity: Activity) -> Self {
        Self {
            activity,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including the node itself.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ActivityNode::node_count).sum::<usize>()
    }
}

/// A physical location housing organizations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Building {
    pub fn location(&self) -> crate::geo::GeoPoint {
        crate::geo::GeoPoint::new(self.latitude, self.longitude)
    }
}

/// A phone number owned by exactly one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub id: PhoneId,
    pub number: String,
    pub organization_id: OrganizationId,
}

/// A directory entry with its building, phones and activities resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub building_id: BuildingId,
    pub building: Building,
    pub phones: Vec<Phone>,
    pub activities: Vec<Activity>,
}

impl Organization {
    pub fn has_activity(&self, id: ActivityId) -> bool {
        self.activities.iter().any(|a| a.id == id)
    }

    pub fn phone_numbers(&self) -> impl Iterator<Item = &str> {
        self.phones.iter().map(|p| p.number.as_str())
    }
}

/// Input for creating an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivity {
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<ActivityId>,
    /// Explicit nesting level; derived from the parent when absent.
    #[serde(default)]
    pub level: Option<u32>,
}

impl NewActivity {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_id: None,
            level: None,
        }
    }

    pub fn child(name: impl Into<String>, parent_id: ActivityId) -> Self {
        Self {
            name: name.into(),
            parent_id: Some(parent_id),
            level: None,
        }
    }
}

/// Input for creating a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBuilding {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewBuilding {
    pub fn new(address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            address: address.into(),
            latitude,
            longitude,
        }
    }
}

/// Input for creating an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrganization {
    pub name: String,
    pub building_id: BuildingId,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub activities: Vec<ActivityId>,
}

impl NewOrganization {
    pub fn new(name: impl Into<String>, building_id: BuildingId) -> Self {
        Self {
            name: name.into(),
            building_id,
            phones: Vec::new(),
            activities: Vec::new(),
        }
    }

    pub fn with_phone(mut self, number: impl Into<String>) -> Self {
        self.phones.push(number.into());
        self
    }

    pub fn with_activity(mut self, id: ActivityId) -> Self {
        self.activities.push(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(id: u64, name: &str, parent: Option<u64>, level: u32) -> Activity {
        Activity {
            id: ActivityId(id),
            name: name.to_string(),
            parent_id: parent.map(ActivityId),
            level,
        }
    }

    #[test]
    fn test_activity_node_len() {
        let tree = ActivityNode {
            activity: activity(1, "Еда", None, 1),
            children: vec![
                ActivityNode {
                    activity: activity(2, "Мясная продукция", Some(1), 2),
                    children: vec![ActivityNode::leaf(activity(4, "Говядина", Some(2), 3))],
                },
                ActivityNode::leaf(activity(3, "Молочная продукция", Some(1), 2)),
            ],
        };
        assert_eq!(tree.node_count(), 4);
        assert!(tree.activity.is_root());
    }

    #[test]
    fn test_new_organization_builder() {
        let input = NewOrganization::new("Мясной магазин", BuildingId(1))
            .with_phone("+7 (999) 111-22-33")
            .with_activity(ActivityId(2));
        assert_eq!(input.phones.len(), 1);
        assert_eq!(input.activities, vec![ActivityId(2)]);
    }

    #[test]
    fn test_new_organization_defaults_from_json() {
        let input: NewOrganization =
            serde_json::from_str(r#"{"name": "Киоск", "building_id": 3}"#).unwrap();
        assert!(input.phones.is_empty());
        assert!(input.activities.is_empty());
        assert_eq!(input.building_id, BuildingId(3));
    }
}
