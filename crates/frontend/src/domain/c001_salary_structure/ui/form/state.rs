use contracts::domain::c001_salary_structure::{
    ComponentDraft, ComponentKind, Country, RuleKind, SalaryStructure, StructureDraft,
};

/// One editable component field group.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentFields {
    pub name: String,
    pub kind: ComponentKind,
    pub rule_kind: Option<RuleKind>,
}

impl Default for ComponentFields {
    fn default() -> Self {
        // New blank components default to a fixed earning.
        Self {
            name: String::new(),
            kind: ComponentKind::Earning,
            rule_kind: Some(RuleKind::Fixed),
        }
    }
}

/// Editable state of the structure form: header fields plus an ordered,
/// user-resizable list of component groups. Owned exclusively by the editor;
/// the catalog data it was loaded from is never mutated through it.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureFormState {
    pub name: String,
    pub country: Country,
    pub components: Vec<ComponentFields>,
}

impl Default for StructureFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: Country::UAE,
            components: Vec::new(),
        }
    }
}

impl StructureFormState {
    /// Starting state for a new structure: one blank component group.
    pub fn new_blank() -> Self {
        Self {
            components: vec![ComponentFields::default()],
            ..Self::default()
        }
    }

    /// Rebuild the form from a persisted structure, one group per component,
    /// preserving order.
    pub fn from_structure(structure: &SalaryStructure) -> Self {
        Self {
            name: structure.name.clone(),
            country: structure.country,
            components: structure
                .components
                .iter()
                .map(|c| ComponentFields {
                    name: c.name.clone(),
                    kind: c.kind,
                    rule_kind: c.rule_kind,
                })
                .collect(),
        }
    }

    pub fn add_component(&mut self) {
        self.components.push(ComponentFields::default());
    }

    /// Remove the group at `index`; out-of-range positions are ignored.
    pub fn remove_component(&mut self, index: usize) {
        if index < self.components.len() {
            self.components.remove(index);
        }
    }

    /// The whole structure is sent as one write; the backend assigns (and
    /// re-assigns) component ids.
    pub fn to_draft(&self) -> StructureDraft {
        StructureDraft {
            name: self.name.trim().to_string(),
            country: self.country,
            components: self
                .components
                .iter()
                .map(|c| ComponentDraft {
                    name: c.name.trim().to_string(),
                    kind: c.kind,
                    rule_kind: c.rule_kind,
                })
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.to_draft().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::c001_salary_structure::{CompensationComponent, ComponentId, StructureId};

    fn sample_structure() -> SalaryStructure {
        SalaryStructure {
            id: Some(StructureId(1)),
            name: "UAE Standard".into(),
            country: Country::UAE,
            created_at: None,
            updated_at: None,
            components: vec![
                CompensationComponent {
                    id: ComponentId(10),
                    name: "Base".into(),
                    kind: ComponentKind::Earning,
                    rule_kind: Some(RuleKind::Fixed),
                    structure_id: Some(StructureId(1)),
                },
                CompensationComponent {
                    id: ComponentId(11),
                    name: "Housing".into(),
                    kind: ComponentKind::Benefit,
                    rule_kind: None,
                    structure_id: Some(StructureId(1)),
                },
            ],
        }
    }

    #[test]
    fn blank_form_starts_with_one_empty_group() {
        let state = StructureFormState::new_blank();
        assert_eq!(state.components.len(), 1);
        assert_eq!(state.components[0], ComponentFields::default());
        assert_eq!(state.components[0].kind, ComponentKind::Earning);
        assert_eq!(state.components[0].rule_kind, Some(RuleKind::Fixed));
    }

    #[test]
    fn append_and_remove_preserve_order() {
        let mut state = StructureFormState::new_blank();
        state.components[0].name = "A".into();
        state.add_component();
        state.components[1].name = "B".into();
        state.add_component();
        state.components[2].name = "C".into();

        state.remove_component(1);
        let names: Vec<&str> = state.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);

        // out-of-range removal is a no-op
        state.remove_component(5);
        assert_eq!(state.components.len(), 2);
    }

    #[test]
    fn from_structure_rebuilds_groups_in_order() {
        let state = StructureFormState::from_structure(&sample_structure());
        assert_eq!(state.name, "UAE Standard");
        assert_eq!(state.components.len(), 2);
        assert_eq!(state.components[0].name, "Base");
        assert_eq!(state.components[1].name, "Housing");
        assert_eq!(state.components[1].kind, ComponentKind::Benefit);
        assert_eq!(state.components[1].rule_kind, None);
    }

    #[test]
    fn draft_trims_names_and_validates() {
        let mut state = StructureFormState::from_structure(&sample_structure());
        state.name = "  KSA Standard  ".into();
        let draft = state.to_draft();
        assert_eq!(draft.name, "KSA Standard");
        assert!(state.validate().is_ok());

        state.components[0].name = "   ".into();
        assert!(state.validate().is_err());
    }
}
