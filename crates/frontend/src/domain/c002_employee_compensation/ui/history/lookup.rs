use contracts::domain::c001_salary_structure::{ComponentId, SalaryStructure, StructureId};
use std::collections::HashMap;

/// View-scoped id-to-name index built from one catalog fetch. Rebuilt on
/// every navigation into the history view; never shared across views and
/// never invalidated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameIndex {
    structures: HashMap<i64, String>,
    components: HashMap<i64, String>,
}

impl NameIndex {
    pub fn build(catalog: &[SalaryStructure]) -> Self {
        let mut structures = HashMap::new();
        let mut components = HashMap::new();
        for structure in catalog {
            if let Some(id) = structure.id {
                structures.insert(id.value(), structure.name.clone());
            }
            for component in &structure.components {
                components.insert(component.id.value(), component.name.clone());
            }
        }
        Self {
            structures,
            components,
        }
    }

    /// Display name of a structure; unknown ids render as "#<id>".
    pub fn structure_name(&self, id: StructureId) -> String {
        self.structures
            .get(&id.value())
            .cloned()
            .unwrap_or_else(|| format!("#{}", id))
    }

    /// Display name of a component; unknown ids render as "#<id>".
    pub fn component_name(&self, id: ComponentId) -> String {
        self.components
            .get(&id.value())
            .cloned()
            .unwrap_or_else(|| format!("#{}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::c001_salary_structure::{
        CompensationComponent, ComponentKind, Country,
    };

    fn catalog() -> Vec<SalaryStructure> {
        vec![SalaryStructure {
            id: Some(StructureId(1)),
            name: "UAE Standard".into(),
            country: Country::UAE,
            created_at: None,
            updated_at: None,
            components: vec![CompensationComponent {
                id: ComponentId(10),
                name: "Base".into(),
                kind: ComponentKind::Earning,
                rule_kind: None,
                structure_id: Some(StructureId(1)),
            }],
        }]
    }

    #[test]
    fn resolves_known_ids() {
        let index = NameIndex::build(&catalog());
        assert_eq!(index.structure_name(StructureId(1)), "UAE Standard");
        assert_eq!(index.component_name(ComponentId(10)), "Base");
    }

    #[test]
    fn unknown_ids_fall_back_to_raw_id() {
        let index = NameIndex::build(&catalog());
        assert_eq!(index.structure_name(StructureId(9)), "#9");
        assert_eq!(index.component_name(ComponentId(99)), "#99");
    }

    #[test]
    fn empty_catalog_builds_empty_index() {
        assert_eq!(NameIndex::build(&[]), NameIndex::default());
    }
}
