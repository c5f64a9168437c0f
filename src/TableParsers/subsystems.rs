/// Subsystem labels of the reaction table become partonomy groups. The cache
/// maps each distinct label to the id of its group for the whole model build,
/// so a label seen again, in any row order, reuses the same group.
use crate::NetworkModel::model::{Group, GroupKind, Model};
use log::info;
use std::collections::HashMap;

/// SBO:0000633 subsystem
pub const SBO_SUBSYSTEM: u32 = 633;

#[derive(Debug, Clone, Default)]
pub struct SubsystemCache {
    groups: HashMap<String, String>,
}

impl SubsystemCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// id of the group created for the label, if any
    pub fn group_id(&self, label: &str) -> Option<&str> {
        self.groups.get(label).map(|id| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Adds the reaction to the group of `label`, creating the group on first
    /// use. Empty labels are ignored. Returns the group id.
    pub fn attach_subsystem(
        &mut self,
        model: &mut Model,
        reaction_id: &str,
        label: &str,
    ) -> Option<String> {
        if label.is_empty() {
            return None;
        }
        let group_id = match self.groups.get(label) {
            Some(id) => id.clone(),
            None => {
                let id = model.next_id("group");
                let group = Group {
                    id: id.clone(),
                    name: Some(label.to_string()),
                    kind: GroupKind::Partonomy,
                    sbo_term: Some(SBO_SUBSYSTEM),
                    members: Vec::new(),
                };
                info!("Created group '{}' for subsystem '{}'", id, label);
                model.groups.insert(id.clone(), group);
                self.groups.insert(label.to_string(), id.clone());
                id
            }
        };
        if let Some(group) = model.get_group_mut(&group_id) {
            group.members.push(reaction_id.to_string());
        }
        Some(group_id)
    }
}
